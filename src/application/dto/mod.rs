/// Data Transfer Objects for application layer
///
/// DTOs carry the host's configuration into the use cases, keeping the
/// domain layer unaware of where the values came from.
mod license_check_request;

pub use license_check_request::LicenseCheckRequest;
