/// ProgressReporter port for user-facing progress on stderr
///
/// Kept apart from `DiagnosticLogger`: progress describes what the tool is
/// doing, diagnostics describe problems found in the input.
pub trait ProgressReporter {
    /// Reports a phase message
    fn report(&self, message: &str);

    /// Reports `current` of `total` items of a long-running phase
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Closes any running progress display and reports the outcome
    fn report_completion(&self, message: &str);
}
