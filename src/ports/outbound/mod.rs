/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (validation server, file system, console).
pub mod dependency_reader;
pub mod license_status_repository;
pub mod progress_reporter;

pub use dependency_reader::DependencyReader;
pub use license_status_repository::LicenseStatusRepository;
pub use progress_reporter::ProgressReporter;
