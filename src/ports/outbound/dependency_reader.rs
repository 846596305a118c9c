use crate::license_validation::domain::DependencyCoordinate;
use crate::shared::Result;
use std::path::Path;

/// DependencyReader port for obtaining a project's resolved dependencies
///
/// This port abstracts the build tool's dependency resolution. The order of the
/// returned coordinates is the order in which they are validated.
pub trait DependencyReader {
    /// Reads the dependency coordinates from the given source
    ///
    /// # Arguments
    /// * `source` - Location of the dependency list (file path for file-based readers)
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or contains an invalid coordinate
    fn read_dependencies(&self, source: &Path) -> Result<Vec<DependencyCoordinate>>;
}
