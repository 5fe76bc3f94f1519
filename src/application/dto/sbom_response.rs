use crate::sbom_generation::domain::SbomDocument;

/// Counters describing one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub components: usize,
    pub packages: usize,
    pub relationships: usize,
    /// Components settled without a package
    pub elided: usize,
    pub warnings: usize,
    pub errors: usize,
}

/// SbomResponse - Internal response DTO from the SBOM generation use case
///
/// Carries the finished document; adapters format it into the requested output.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    pub document: SbomDocument,
    pub stats: GenerationStats,
}

impl SbomResponse {
    pub fn new(document: SbomDocument, stats: GenerationStats) -> Self {
        Self { document, stats }
    }
}
