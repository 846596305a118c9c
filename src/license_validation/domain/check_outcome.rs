use super::LicenseStatus;

/// Classification of a single coordinate check
///
/// `Fail` and `LookupError` both reject the coordinate; they differ only
/// in whether the server gave a structurally valid answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The server reports a declared license
    Pass { message: String },
    /// The server answered, but no acceptable license is declared
    Fail { message: String },
    /// The lookup itself failed: transport error, non-2xx status, or unreadable body
    LookupError { details: String },
}

impl CheckOutcome {
    /// Classifies a server response into a pass or fail narration line
    pub fn classify(status: &LicenseStatus) -> Self {
        if status.is_declared() {
            CheckOutcome::Pass {
                message: format!(
                    "...{}: {}",
                    status.declared(),
                    status.license_name().unwrap_or_default()
                ),
            }
        } else {
            let license = status.license_name().unwrap_or("NO LICENSE FOUND");
            CheckOutcome::Fail {
                message: format!("...{}: : {}", status.declared(), license),
            }
        }
    }

    pub fn lookup_error(err: &anyhow::Error) -> Self {
        CheckOutcome::LookupError {
            details: format!("{:#}", err),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass { .. })
    }

    /// The line to hand to the log for this outcome
    pub fn message(&self) -> &str {
        match self {
            CheckOutcome::Pass { message } | CheckOutcome::Fail { message } => message,
            CheckOutcome::LookupError { details } => details,
        }
    }
}
