use crate::sbom_generation::domain::{Diagnostic, Severity};

/// DiagnosticLogger port for non-fatal findings raised during generation
///
/// Diagnostics never change control flow; implementations only record them.
pub trait DiagnosticLogger {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    /// Dispatches a collected diagnostic by severity
    fn log(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Info => self.info(&diagnostic.message),
            Severity::Warn => self.warn(&diagnostic.message),
            Severity::Error => self.error(&diagnostic.message),
        }
    }
}
