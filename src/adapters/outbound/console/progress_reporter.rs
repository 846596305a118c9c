use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port with build-log style
/// lines (`[INFO] ...`, `[ERROR] ...`). The error prefix is coloured only
/// when stderr supports it, so piped output stays plain.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }

    fn info_line(message: &str) -> String {
        format!("[INFO] {}", message)
    }

    fn error_line(message: &str) -> String {
        format!(
            "{} {}",
            "[ERROR]".if_supports_color(Stream::Stderr, |text| text.red()),
            message
        )
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", Self::info_line(message));
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", Self::error_line(message));
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", Self::info_line(""));
        eprintln!("{}", Self::info_line(message));
    }
}
