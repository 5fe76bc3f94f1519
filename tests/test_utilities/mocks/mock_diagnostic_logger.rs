use gradle_spdx_sbom::prelude::*;
use gradle_spdx_sbom::sbom_generation::domain::Severity;
use std::sync::{Arc, Mutex};

/// Mock DiagnosticLogger that records every diagnostic with its severity
#[derive(Default, Clone)]
pub struct MockDiagnosticLogger {
    entries: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl MockDiagnosticLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(Severity::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(Severity::Error)
    }

    fn push(&self, severity: Severity, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

impl DiagnosticLogger for MockDiagnosticLogger {
    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}
