//! license-check - dependency license validation
//!
//! This library validates that every dependency of a project declares an
//! open-source license by asking a remote validation server about each
//! `groupId:artifactId:version` coordinate, following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`license_validation`): coordinates, server verdicts, run outcome, failure policy
//! - **Application Layer** (`application`): the coordinate check and the validation run use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): validation server client, dependency list reader, stderr reporter
//! - **Config** (`config`): YAML config file and CLI override merging
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_check::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ValidateLicensesUseCase::new(
//!     FileSystemReader::new(),
//!     ValidationServerClient::new(DEFAULT_HOST, None),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = LicenseCheckRequest::new(
//!     PathBuf::from("dependencies.txt"),
//!     false,
//!     FailurePolicy::FailFast,
//! );
//! let outcome = use_case.execute(request)?;
//! outcome.ensure_success()?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_validation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::network::{ValidationServerClient, DEFAULT_HOST};
    pub use crate::application::dto::LicenseCheckRequest;
    pub use crate::application::use_cases::{CheckCoordinateUseCase, ValidateLicensesUseCase};
    pub use crate::license_validation::domain::{
        CheckOutcome, DependencyCoordinate, LicenseStatus, RunOutcome, RunStatus,
    };
    pub use crate::license_validation::policies::FailurePolicy;
    pub use crate::ports::inbound::LicenseValidationPort;
    pub use crate::ports::outbound::{DependencyReader, LicenseStatusRepository, ProgressReporter};
    pub use crate::shared::error::{ExitCode, LicenseCheckError};
    pub use crate::shared::Result;
}
