/// The `licenseDeclared` value the validation server uses for an accepted dependency
pub const DECLARED_OK: &str = "ok";

/// LicenseStatus value object: what the validation server reported for one coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseStatus {
    declared: String,
    license_name: Option<String>,
}

impl LicenseStatus {
    pub fn new(declared: String, license_name: Option<String>) -> Self {
        Self {
            declared,
            license_name,
        }
    }

    pub fn declared(&self) -> &str {
        &self.declared
    }

    /// License name, treating an empty string the same as an absent one
    pub fn license_name(&self) -> Option<&str> {
        self.license_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_declared(&self) -> bool {
        self.declared == DECLARED_OK
    }
}
