/// Console adapters writing to stderr
mod diagnostic_logger;
mod progress_reporter;

pub use diagnostic_logger::StderrDiagnosticLogger;
pub use progress_reporter::StderrProgressReporter;
