use crate::ports::outbound::DiagnosticLogger;
use owo_colors::OwoColorize;

/// StderrDiagnosticLogger adapter printing colored diagnostics to stderr
///
/// Info-level lines (elided components) are only shown when verbose.
pub struct StderrDiagnosticLogger {
    verbose: bool,
}

impl StderrDiagnosticLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn line(level: &str, message: &str) -> String {
        format!("{}: {}", level, message)
    }
}

impl Default for StderrDiagnosticLogger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DiagnosticLogger for StderrDiagnosticLogger {
    fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", Self::line("info", message).dimmed());
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", Self::line("warning", message).yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", Self::line("error", message).red());
    }
}
