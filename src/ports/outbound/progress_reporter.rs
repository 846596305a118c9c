/// ProgressReporter port for line-oriented status output
///
/// This port stands in for the host build tool's log: informational lines
/// go through `report`, rejections and lookup failures through `report_error`.
pub trait ProgressReporter {
    /// Reports an informational line
    ///
    /// # Arguments
    /// * `message` - The line to report
    fn report(&self, message: &str);

    /// Reports an error-level line
    ///
    /// # Arguments
    /// * `message` - The error line
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    ///
    /// # Arguments
    /// * `message` - Completion summary
    fn report_completion(&self, message: &str);
}
