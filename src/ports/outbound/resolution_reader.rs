use crate::sbom_generation::domain::BuildResolution;
use crate::shared::Result;
use std::path::Path;

/// ResolutionReader port for loading the build tool's resolution report
///
/// The report is the whole input of one run: the resolved component graph,
/// the raw artifact mapping, POM metadata, repositories and projects.
pub trait ResolutionReader {
    /// Reads and validates the resolution report at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report does not exist or is not a regular file
    /// - The report is malformed or references unknown identity kinds
    fn read_resolution(&self, path: &Path) -> Result<BuildResolution>;
}
