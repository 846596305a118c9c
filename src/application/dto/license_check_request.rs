use crate::license_validation::policies::FailurePolicy;
use std::path::PathBuf;

/// LicenseCheckRequest - Request DTO for the validation run
#[derive(Debug, Clone)]
pub struct LicenseCheckRequest {
    /// Location of the dependency list handed to the DependencyReader
    pub dependencies_path: PathBuf,
    /// Skip validation entirely; the dependency list is not even read
    pub offline: bool,
    /// Whether to stop at the first rejected dependency
    pub failure_policy: FailurePolicy,
}

impl LicenseCheckRequest {
    pub fn new(dependencies_path: PathBuf, offline: bool, failure_policy: FailurePolicy) -> Self {
        Self {
            dependencies_path,
            offline,
            failure_policy,
        }
    }
}
