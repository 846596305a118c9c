use crate::license_validation::domain::{DependencyCoordinate, LicenseStatus};
use crate::ports::outbound::LicenseStatusRepository;
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::Client;
use serde::Deserialize;

/// Validation server used when neither the CLI nor the config file names one
pub const DEFAULT_HOST: &str = "http://complykit.org/api/license-check/";

/// Wire format of the validation server's answer
#[derive(Debug, Deserialize)]
struct LicenseCheckResponse {
    #[serde(rename = "licenseDeclared")]
    license_declared: String,
    #[serde(default)]
    license: Option<String>,
}

/// ValidationServerClient adapter for the remote license-check endpoint
///
/// This adapter implements the LicenseStatusRepository port with one blocking
/// GET per coordinate:
///
/// ```text
/// GET <host><groupId>:<artifactId>:<version>[?notify=<email>]
/// ```
///
/// No retries are attempted and the transport's default timeouts apply.
pub struct ValidationServerClient {
    host: String,
    notification_email: Option<String>,
    user_agent: String,
}

impl ValidationServerClient {
    /// Creates a client for the given server
    ///
    /// # Arguments
    /// * `host` - Base URL the coordinate is appended to, verbatim
    /// * `notification_email` - Sent as `notify` so the server can report back later
    pub fn new(host: impl Into<String>, notification_email: Option<String>) -> Self {
        Self {
            host: host.into(),
            notification_email,
            user_agent: format!("license-check/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Builds the lookup URL for a coordinate
    pub fn request_url(&self, coordinate: &DependencyCoordinate) -> String {
        build_request_url(&self.host, coordinate, self.notification_email.as_deref())
    }

    fn fetch(&self, url: &str) -> Result<LicenseStatus> {
        // A fresh client per lookup; dropped with its connections on every return path
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        let response = client
            .get(url)
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Validation server returned status code {} for {}", status, url);
        }

        let body = response
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))?;

        let parsed: LicenseCheckResponse = serde_json::from_str(&body)
            .with_context(|| format!("Validation server returned an unreadable response for {}", url))?;

        Ok(LicenseStatus::new(parsed.license_declared, parsed.license))
    }
}

impl LicenseStatusRepository for ValidationServerClient {
    fn fetch_license_status(&self, coordinate: &DependencyCoordinate) -> Result<LicenseStatus> {
        let url = self.request_url(coordinate);
        self.fetch(&url)
    }
}

/// Concatenates host and coordinate, appending `?notify=<email>` when present
///
/// Nothing is percent-encoded: the server expects the coordinate and the
/// address exactly as written.
pub fn build_request_url(
    host: &str,
    coordinate: &DependencyCoordinate,
    notification_email: Option<&str>,
) -> String {
    match notification_email {
        Some(email) => format!("{}{}?notify={}", host, coordinate, email),
        None => format!("{}{}", host, coordinate),
    }
}
