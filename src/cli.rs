use clap::Parser;
use std::path::PathBuf;

use license_check::config::ConfigOverrides;

/// Validate that every dependency of a project declares an open-source license
#[derive(Parser, Debug)]
#[command(name = "license-check")]
#[command(version)]
#[command(about = "Validate that every dependency of a project declares an open-source license", long_about = None)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Dependency list: groupId:artifactId:version lines or `mvn dependency:list` output
    /// (defaults to <path>/dependencies.txt)
    #[arg(short, long, value_name = "FILE")]
    pub dependencies: Option<String>,

    /// Config file (defaults to <path>/license-check.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Validation server base URL; the coordinate is appended to it verbatim
    #[arg(long, value_name = "URL", env = "LICENSE_CHECK_HOST")]
    pub host: Option<String>,

    /// E-mail address the validation server may notify about unknown artifacts
    #[arg(long = "notify", value_name = "EMAIL", env = "LICENSE_CHECK_NOTIFICATION_EMAIL")]
    pub notification_email: Option<String>,

    /// Skip validation entirely (no network access)
    #[arg(long)]
    pub offline: bool,

    /// Check every dependency before failing instead of stopping at the first rejection
    #[arg(long)]
    pub fail_at_end: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            notification_email: self.notification_email.clone(),
            offline: self.offline,
            dependencies_file: self.dependencies.as_ref().map(PathBuf::from),
            fail_at_end: self.fail_at_end,
        }
    }
}
