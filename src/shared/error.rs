use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a rejected dependency
/// from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every dependency declares a license, or the run was skipped offline
    Success = 0,
    /// At least one dependency could not be validated
    LicenseValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing dependency file, bad config, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the application.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LicenseCheckError>() {
            Some(LicenseCheckError::ValidationFailure { .. }) => ExitCode::LicenseValidationFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LicenseValidationFailed => write!(f, "License Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license validation.
#[derive(Debug, Error)]
pub enum LicenseCheckError {
    /// The only error the validation core lets escape: names the first rejected coordinate.
    #[error("could not validate license for artifact {coordinate}")]
    ValidationFailure { coordinate: String },

    #[error("Dependency list not found: {path}\n\n💡 Hint: {suggestion}")]
    DependencyFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency list: {path} (line {line})\nDetails: {details}\n\n💡 Hint: Each line must be groupId:artifactId:version or a `mvn dependency:list` entry")]
    DependencyParseError {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
