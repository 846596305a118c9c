use super::DependencyCoordinate;
use crate::shared::error::LicenseCheckError;

/// Terminal state of a validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Every checked coordinate declares a license
    Succeeded,
    /// A coordinate was rejected; holds the first one encountered
    Failed { coordinate: DependencyCoordinate },
    /// The run was configured offline and nothing was checked
    SkippedOffline,
}

/// RunOutcome aggregate for one invocation of the validation run
///
/// Constructed only through [`RunOutcome::skipped_offline`] and
/// [`RunOutcome::from_checks`], so the status always agrees with the failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    total: usize,
    checked: usize,
    failures: Vec<DependencyCoordinate>,
    status: RunStatus,
}

impl RunOutcome {
    pub fn skipped_offline() -> Self {
        Self {
            total: 0,
            checked: 0,
            failures: Vec::new(),
            status: RunStatus::SkippedOffline,
        }
    }

    /// Finalizes an online run
    ///
    /// # Arguments
    /// * `total` - Number of coordinates supplied by the dependency source
    /// * `checked` - Number of coordinates actually sent to the checker
    /// * `failures` - Rejected coordinates in iteration order
    pub fn from_checks(total: usize, checked: usize, failures: Vec<DependencyCoordinate>) -> Self {
        let status = match failures.first() {
            Some(first) => RunStatus::Failed {
                coordinate: first.clone(),
            },
            None => RunStatus::Succeeded,
        };

        Self {
            total,
            checked,
            failures,
            status,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn failures(&self) -> &[DependencyCoordinate] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    /// True for the two terminal states that let the build continue
    pub fn is_success(&self) -> bool {
        !matches!(self.status, RunStatus::Failed { .. })
    }

    /// Converts a failed run into the error that should abort the build
    pub fn ensure_success(&self) -> Result<(), LicenseCheckError> {
        match &self.status {
            RunStatus::Failed { coordinate } => Err(LicenseCheckError::ValidationFailure {
                coordinate: coordinate.to_string(),
            }),
            RunStatus::Succeeded | RunStatus::SkippedOffline => Ok(()),
        }
    }
}
