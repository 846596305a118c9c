use crate::application::dto::LicenseCheckRequest;
use crate::license_validation::domain::RunOutcome;
use crate::shared::Result;

/// LicenseValidationPort - Inbound port for the validation run
///
/// This is the interface a host integration (the CLI, or a build-tool plugin)
/// drives to validate a project's dependencies.
pub trait LicenseValidationPort {
    /// Runs license validation for the dependencies described by the request
    ///
    /// # Returns
    /// The finalized run outcome. A rejected dependency is reported through the
    /// outcome's status, not as an `Err`; call [`RunOutcome::ensure_success`] to
    /// turn it into the build-breaking error.
    ///
    /// # Errors
    /// Returns an error if the dependency list cannot be obtained
    fn validate(&self, request: LicenseCheckRequest) -> Result<RunOutcome>;
}
