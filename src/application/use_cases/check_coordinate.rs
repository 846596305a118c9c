use crate::license_validation::domain::{CheckOutcome, DependencyCoordinate};
use crate::ports::outbound::{LicenseStatusRepository, ProgressReporter};

/// CheckCoordinateUseCase - validates a single dependency coordinate
///
/// Performs one lookup against the validation server and classifies the answer.
/// Lookup failures are reported here and folded into a rejecting outcome, so the
/// caller never sees a transport or parse error.
pub struct CheckCoordinateUseCase<'a, LREPO, PR> {
    license_repository: &'a LREPO,
    progress_reporter: &'a PR,
}

impl<'a, LREPO, PR> CheckCoordinateUseCase<'a, LREPO, PR>
where
    LREPO: LicenseStatusRepository,
    PR: ProgressReporter,
{
    pub fn new(license_repository: &'a LREPO, progress_reporter: &'a PR) -> Self {
        Self {
            license_repository,
            progress_reporter,
        }
    }

    /// Checks one coordinate and narrates the result
    ///
    /// Emits exactly one line: info level for a pass, error level otherwise.
    pub fn execute(&self, coordinate: &DependencyCoordinate) -> CheckOutcome {
        let outcome = match self.license_repository.fetch_license_status(coordinate) {
            Ok(status) => CheckOutcome::classify(&status),
            Err(e) => CheckOutcome::lookup_error(&e),
        };

        if outcome.is_pass() {
            self.progress_reporter.report(outcome.message());
        } else {
            self.progress_reporter.report_error(outcome.message());
        }

        outcome
    }
}
