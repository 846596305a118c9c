use license_check::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum MockAnswer {
    Status(&'static str, &'static str),
    LookupFailure(&'static str),
}

/// Mock LicenseStatusRepository that records every lookup
///
/// Coordinates without a configured answer are reported as `ok` / `Apache-2.0`.
#[derive(Clone, Default)]
pub struct MockLicenseStatusRepository {
    answers: HashMap<String, MockAnswer>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockLicenseStatusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_answer(mut self, coordinate: &str, answer: MockAnswer) -> Self {
        self.answers.insert(coordinate.to_string(), answer);
        self
    }

    pub fn with_status(self, coordinate: &str, declared: &'static str, license: &'static str) -> Self {
        self.with_answer(coordinate, MockAnswer::Status(declared, license))
    }

    pub fn with_lookup_failure(self, coordinate: &str, details: &'static str) -> Self {
        self.with_answer(coordinate, MockAnswer::LookupFailure(details))
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl LicenseStatusRepository for MockLicenseStatusRepository {
    fn fetch_license_status(&self, coordinate: &DependencyCoordinate) -> Result<LicenseStatus> {
        let key = coordinate.to_string();
        self.calls.lock().unwrap().push(key.clone());

        match self.answers.get(&key) {
            Some(MockAnswer::Status(declared, license)) => Ok(LicenseStatus::new(
                declared.to_string(),
                Some(license.to_string()),
            )),
            Some(MockAnswer::LookupFailure(details)) => anyhow::bail!("{}", details),
            None => Ok(LicenseStatus::new(
                "ok".to_string(),
                Some("Apache-2.0".to_string()),
            )),
        }
    }
}
