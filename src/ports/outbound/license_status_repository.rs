use crate::license_validation::domain::{DependencyCoordinate, LicenseStatus};
use crate::shared::Result;

/// LicenseStatusRepository port for looking up a coordinate's license declaration
///
/// This port abstracts the remote validation server. Implementations own the
/// server location and any query parameters appended to each lookup.
pub trait LicenseStatusRepository {
    /// Fetches the license status for one dependency coordinate
    ///
    /// # Arguments
    /// * `coordinate` - The dependency to look up
    ///
    /// # Returns
    /// The license status reported by the server
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The server answers with a non-success status code
    /// - The response body is not the expected JSON document
    fn fetch_license_status(&self, coordinate: &DependencyCoordinate) -> Result<LicenseStatus>;
}
