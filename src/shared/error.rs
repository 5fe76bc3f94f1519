use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM generated and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad report, graph contract violation, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Every variant is fatal: an SBOM is all-or-nothing, so these bubble out of
/// the graph walk and abort the whole run.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Resolution report not found: {path}\n\n💡 Hint: {suggestion}")]
    ReportNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse resolution report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the report was produced by the resolver export task")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a readable resolution report")]
    InvalidInputPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Unknown package type for component: {component}")]
    UnknownComponentKind { component: String },

    #[error("Dependency graph references a component that was never resolved: {component}")]
    UnknownComponent { component: String },

    #[error("Source repository could not be determined for {component}")]
    UnresolvedSourceRepository { component: String },

    #[error("Module version identifier is missing for {component}")]
    MissingModuleVersion { component: String },

    #[error("Project {path} is part of the graph but missing from the project registry")]
    UnknownProject { path: String },

    #[error("Root component {component} did not produce a package; the document has nothing to describe")]
    MissingRootPackage { component: String },

    #[error("Failed to compute checksums for {path}\nDetails: {details}")]
    ChecksumError { path: PathBuf, details: String },
}
