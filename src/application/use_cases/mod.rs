/// Use cases module containing application business logic orchestration
mod check_coordinate;
mod validate_licenses;

pub use check_coordinate::CheckCoordinateUseCase;
pub use validate_licenses::ValidateLicensesUseCase;
