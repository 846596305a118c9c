pub mod check_outcome;
pub mod coordinate;
pub mod license_status;
pub mod run_outcome;

pub use check_outcome::CheckOutcome;
pub use coordinate::DependencyCoordinate;
pub use license_status::LicenseStatus;
pub use run_outcome::{RunOutcome, RunStatus};
