/// Console adapters for line-oriented status output
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
