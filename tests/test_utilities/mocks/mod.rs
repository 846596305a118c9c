/// Mock implementations for testing
mod mock_dependency_reader;
mod mock_license_status_repository;
mod mock_progress_reporter;

pub use mock_dependency_reader::MockDependencyReader;
pub use mock_license_status_repository::MockLicenseStatusRepository;
pub use mock_progress_reporter::MockProgressReporter;
