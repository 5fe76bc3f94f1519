/// Mock implementations for testing
mod mock_diagnostic_logger;
mod mock_progress_reporter;
mod mock_resolution_reader;

pub use mock_diagnostic_logger::MockDiagnosticLogger;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resolution_reader::{MockResolutionReader, MAVEN_CENTRAL, MAVEN_REPO};
