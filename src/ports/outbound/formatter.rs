use crate::sbom_generation::domain::SbomDocument;
use crate::shared::Result;

/// SbomFormatter port for formatting SBOM output
///
/// This port abstracts the formatting logic for different output formats
/// (SPDX JSON, Markdown).
pub trait SbomFormatter {
    /// Formats a completed SBOM document
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, document: &SbomDocument) -> Result<String>;
}
