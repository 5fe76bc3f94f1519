/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod diagnostic_logger;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod resolution_reader;

pub use diagnostic_logger::DiagnosticLogger;
pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use resolution_reader::ResolutionReader;
