use super::CheckCoordinateUseCase;
use crate::application::dto::LicenseCheckRequest;
use crate::license_validation::domain::{RunOutcome, RunStatus};
use crate::license_validation::policies::FailurePolicy;
use crate::ports::inbound::LicenseValidationPort;
use crate::ports::outbound::{DependencyReader, LicenseStatusRepository, ProgressReporter};
use crate::shared::Result;


const BANNER_RULE: &str =
    "------------------------------------------------------------------------";
const BANNER_TITLE: &str = "VALIDATING LICENSES";
const OFFLINE_NOTICE: &str = "currently offline, skipping this step";
const OSI_NOTICE: &str = "This tool will validate that the artifacts you're using have a license file. \
When the validation server recognizes that an artifact is one of the Open Source Initiative (OSI) \
approved licenses, it will give you the URL for the license. This tool and its authors are not \
associated with the OSI.";

/// ValidateLicensesUseCase - Core use case for a validation run
///
/// Reads the project's dependency coordinates and checks each one in order
/// against the validation server. Checks are strictly sequential: one lookup
/// completes before the next starts.
///
/// # Type Parameters
/// * `DR` - DependencyReader implementation
/// * `LREPO` - LicenseStatusRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ValidateLicensesUseCase<DR, LREPO, PR> {
    dependency_reader: DR,
    license_repository: LREPO,
    progress_reporter: PR,
}

impl<DR, LREPO, PR> ValidateLicensesUseCase<DR, LREPO, PR>
where
    DR: DependencyReader,
    LREPO: LicenseStatusRepository,
    PR: ProgressReporter,
{
    /// Creates a new ValidateLicensesUseCase with injected dependencies
    pub fn new(dependency_reader: DR, license_repository: LREPO, progress_reporter: PR) -> Self {
        Self {
            dependency_reader,
            license_repository,
            progress_reporter,
        }
    }

    /// Executes the validation run
    ///
    /// # Returns
    /// `SkippedOffline` without touching the dependency source when the request is
    /// offline, otherwise `Succeeded` or `Failed` naming the first rejected coordinate.
    pub fn execute(&self, request: LicenseCheckRequest) -> Result<RunOutcome> {
        self.report_banner();

        if request.offline {
            self.progress_reporter.report(OFFLINE_NOTICE);
            return Ok(RunOutcome::skipped_offline());
        }

        self.progress_reporter.report(OSI_NOTICE);

        let coordinates = self
            .dependency_reader
            .read_dependencies(&request.dependencies_path)?;
        let total = coordinates.len();
        self.progress_reporter
            .report(&format!("Found {} artifacts", total));

        let checker =
            CheckCoordinateUseCase::new(&self.license_repository, &self.progress_reporter);
        let mut failures = Vec::new();
        let mut checked = 0;

        for coordinate in coordinates {
            self.progress_reporter.report(&format!("{}...", coordinate));
            checked += 1;

            if !checker.execute(&coordinate).is_pass() {
                failures.push(coordinate);
                if request.failure_policy.should_stop(failures.len()) {
                    break;
                }
            }
        }

        let outcome = RunOutcome::from_checks(total, checked, failures);
        self.report_summary(&outcome, request.failure_policy);
        Ok(outcome)
    }

    fn report_banner(&self) {
        self.progress_reporter.report(BANNER_RULE);
        self.progress_reporter.report(BANNER_TITLE);
        self.progress_reporter.report(BANNER_RULE);
    }

    fn report_summary(&self, outcome: &RunOutcome, failure_policy: FailurePolicy) {
        match outcome.status() {
            RunStatus::Succeeded => {
                self.progress_reporter.report_completion(&format!(
                    "✅ License validation complete: {} artifact(s) declare a license",
                    outcome.checked()
                ));
            }
            RunStatus::Failed { .. } => {
                if failure_policy == FailurePolicy::FailAtEnd {
                    for coordinate in outcome.failures() {
                        self.progress_reporter
                            .report_error(&format!("   - {}", coordinate));
                    }
                }
                self.progress_reporter.report_completion(&format!(
                    "❌ License validation failed: {} of {} checked artifact(s) rejected ({} found)",
                    outcome.failure_count(),
                    outcome.checked(),
                    outcome.total()
                ));
            }
            RunStatus::SkippedOffline => {}
        }
    }
}

impl<DR, LREPO, PR> LicenseValidationPort for ValidateLicensesUseCase<DR, LREPO, PR>
where
    DR: DependencyReader,
    LREPO: LicenseStatusRepository,
    PR: ProgressReporter,
{
    fn validate(&self, request: LicenseCheckRequest) -> Result<RunOutcome> {
        self.execute(request)
    }
}
