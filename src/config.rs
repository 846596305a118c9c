//! Configuration file support for license-check.
//!
//! Provides YAML-based configuration through `license-check.config.yml` files,
//! and the merge of file values with command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::filesystem::DEPENDENCIES_FILENAME;
use crate::adapters::outbound::network::DEFAULT_HOST;
use crate::license_validation::policies::FailurePolicy;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-check.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub notification_email: Option<String>,
    pub offline: Option<bool>,
    /// Relative paths are resolved against the project directory.
    pub dependencies_file: Option<PathBuf>,
    pub fail_at_end: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line; these win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub notification_email: Option<String>,
    pub offline: bool,
    pub dependencies_file: Option<PathBuf>,
    pub fail_at_end: bool,
}

/// Effective settings for one run after merging CLI, config file, and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub host: String,
    pub notification_email: Option<String>,
    pub offline: bool,
    pub dependencies_path: PathBuf,
    pub failure_policy: FailurePolicy,
}

impl ResolvedConfig {
    /// Merges overrides over the config file over defaults, then validates the result.
    ///
    /// Host and notification email are only validated for online runs; an offline
    /// run never contacts the server.
    pub fn resolve(
        overrides: ConfigOverrides,
        config_file: Option<ConfigFile>,
        project_path: &Path,
    ) -> Result<Self> {
        let file = config_file.unwrap_or_default();
        let offline = overrides.offline || file.offline.unwrap_or(false);

        let host = overrides
            .host
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let notification_email = overrides.notification_email.or(file.notification_email);

        if !offline {
            validate_host(&host)?;
            if let Some(ref email) = notification_email {
                validate_notification_email(email)?;
            }
        }

        let dependencies_path = match overrides.dependencies_file {
            Some(path) => path,
            None => project_path.join(
                file.dependencies_file
                    .unwrap_or_else(|| PathBuf::from(DEPENDENCIES_FILENAME)),
            ),
        };

        Ok(Self {
            host,
            notification_email,
            offline,
            dependencies_path,
            failure_policy: FailurePolicy::from_fail_at_end(
                overrides.fail_at_end || file.fail_at_end.unwrap_or(false),
            ),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_host(host: &str) -> Result<()> {
    if host.trim().is_empty() {
        bail!("Invalid config: host must not be empty.");
    }
    if !host.starts_with("http://") && !host.starts_with("https://") {
        bail!(
            "Invalid config: host '{}' must start with http:// or https://\n\n\
             💡 Hint: The coordinate is appended to the host, e.g. \"{}\".",
            host,
            DEFAULT_HOST
        );
    }
    Ok(())
}

fn validate_notification_email(email: &str) -> Result<()> {
    // The address goes into the query string unencoded
    if email.is_empty()
        || !email.contains('@')
        || email
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '&' | '#' | '?' | '/'))
    {
        bail!(
            "Invalid config: notification email '{}' is not a plain e-mail address.",
            email
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
