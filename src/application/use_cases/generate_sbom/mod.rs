use crate::application::dto::{GenerationStats, SbomRequest, SbomResponse};
use crate::ports::outbound::{DiagnosticLogger, ProgressReporter, ResolutionReader};
use crate::sbom_generation::domain::{
    BuildResolution, ComponentId, Diagnostics, DocumentInfo, SbomDocument, Severity,
};
use crate::sbom_generation::policies::{ConfiguredPackagePolicy, ProjectFilter};
use crate::sbom_generation::services::{
    ArtifactIndex, ChecksumCalculator, GraphWalker, PackageFactory, RelationshipEmitter,
    SbomGenerator, SynthesisContext, DEFAULT_PROJECT_SUPPLIER,
};
use crate::shared::Result;
use std::path::PathBuf;

/// Document name used when neither settings nor the build name the root project
const FALLBACK_DOCUMENT_NAME: &str = "sbom";

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Reads the resolution report, flattens the resolved graph into packages and
/// depends-on relationships and hands back the finished document.
///
/// # Type Parameters
/// * `RR` - ResolutionReader implementation
/// * `PR` - ProgressReporter implementation
/// * `DL` - DiagnosticLogger implementation
pub struct GenerateSbomUseCase<RR, PR, DL> {
    resolution_reader: RR,
    progress_reporter: PR,
    diagnostic_logger: DL,
}

impl<RR, PR, DL> GenerateSbomUseCase<RR, PR, DL>
where
    RR: ResolutionReader,
    PR: ProgressReporter,
    DL: DiagnosticLogger,
{
    pub fn new(resolution_reader: RR, progress_reporter: PR, diagnostic_logger: DL) -> Self {
        Self {
            resolution_reader,
            progress_reporter,
            diagnostic_logger,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// Diagnostics collected before a fatal error are still forwarded to the
    /// logger, then the error is returned.
    pub async fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Read the resolution report
        let resolution = self.read_resolution(&request)?;

        // Step 2: Merge document settings and build the policy
        let document_info = Self::resolve_document_info(&request, &resolution);
        let policy = Self::build_policy(&request)?;

        // Step 3: Index the materialized artifacts
        let mut diagnostics = Diagnostics::new();
        let artifacts = ArtifactIndex::build(
            &resolution.artifacts,
            &request.placeholder_extensions,
            &mut diagnostics,
        );
        self.progress_reporter.report(&format!(
            "📦 Indexed {} artifact file(s) for {} component(s)",
            artifacts.len(),
            resolution.graph.len()
        ));

        // Step 4: Hash every artifact up front
        let checksums = ChecksumCalculator::new();
        self.precompute_checksums(&checksums, &artifacts, request.checksum_concurrency)
            .await;

        // Step 5: Walk the graph and emit relationships
        let outcome = self.flatten(
            &request,
            &resolution,
            &document_info,
            &policy,
            &artifacts,
            &checksums,
            &mut diagnostics,
        );

        // Step 6: Forward diagnostics even when the walk failed
        let (warnings, errors) = self.forward_diagnostics(&mut diagnostics);
        self.warn_unmatched_patterns(policy.project_filter());

        let (document, surviving) = outcome?;
        let stats = GenerationStats {
            components: resolution.graph.len(),
            packages: document.package_count(),
            relationships: document.relationships().count(),
            elided: resolution.graph.len().saturating_sub(surviving),
            warnings,
            errors,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Generated {} package(s) and {} relationship(s)",
            stats.packages, stats.relationships
        ));

        Ok(SbomResponse::new(document, stats))
    }

    fn read_resolution(&self, request: &SbomRequest) -> Result<BuildResolution> {
        self.progress_reporter.report(&format!(
            "📖 Loading resolution report from: {}",
            request.input_path.display()
        ));

        let resolution = self
            .resolution_reader
            .read_resolution(&request.input_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s) in {} project(s)",
            resolution.graph.len(),
            resolution.projects.len()
        ));

        Ok(resolution)
    }

    /// Request settings win over the report's, the report's over built-in defaults
    fn resolve_document_info(request: &SbomRequest, resolution: &BuildResolution) -> DocumentInfo {
        let overrides = &request.document;
        let report = &resolution.document;

        let name = overrides
            .name
            .clone()
            .or_else(|| report.name.clone())
            .or_else(|| resolution.root_project().map(|p| p.name.clone()))
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_DOCUMENT_NAME.to_string());
        let namespace = overrides
            .namespace
            .clone()
            .or_else(|| report.namespace.clone())
            .unwrap_or_else(|| SbomGenerator::default_namespace(&name));

        DocumentInfo {
            name,
            namespace,
            creator: overrides.creator.clone().or_else(|| report.creator.clone()),
            supplier: overrides.supplier.clone().or_else(|| report.supplier.clone()),
            uber_package: overrides
                .uber_package
                .clone()
                .or_else(|| report.uber_package.clone()),
        }
    }

    fn build_policy(request: &SbomRequest) -> Result<ConfiguredPackagePolicy> {
        let filter = ProjectFilter::new(request.exclude_projects.clone())?;
        Ok(ConfiguredPackagePolicy::new(
            filter,
            request.scm_overrides.clone(),
            request.repository_mappings.clone(),
        ))
    }

    async fn precompute_checksums(
        &self,
        checksums: &ChecksumCalculator,
        artifacts: &ArtifactIndex,
        concurrency: usize,
    ) {
        if artifacts.is_empty() {
            return;
        }

        let files: Vec<PathBuf> = artifacts.files().map(PathBuf::from).collect();
        self.progress_reporter
            .report(&format!("🔐 Computing checksums for {} file(s)...", files.len()));

        checksums
            .precompute(files, concurrency, |done, total| {
                self.progress_reporter
                    .report_progress(done, total, Some("checksums"));
            })
            .await;
    }

    /// Returns the finished document and the number of graph components that got a package
    #[allow(clippy::too_many_arguments)]
    fn flatten(
        &self,
        request: &SbomRequest,
        resolution: &BuildResolution,
        document_info: &DocumentInfo,
        policy: &ConfiguredPackagePolicy,
        artifacts: &ArtifactIndex,
        checksums: &ChecksumCalculator,
        diagnostics: &mut Diagnostics,
    ) -> Result<(SbomDocument, usize)> {
        let projects = resolution.project_registry();
        let project_supplier = document_info
            .supplier
            .as_deref()
            .unwrap_or(DEFAULT_PROJECT_SUPPLIER);

        let factory = PackageFactory::new(SynthesisContext {
            projects: &projects,
            poms: &resolution.poms,
            repositories: &resolution.repositories,
            scm: &resolution.scm,
            project_supplier,
            artifacts,
            checksums,
            policy,
            missing_module_version: request.missing_module_version,
        });

        let document = SbomDocument::new(SbomGenerator::generate_default_metadata(document_info));
        let flattened = GraphWalker::new(&factory).walk(
            &resolution.graph,
            document_info.uber_package.as_ref(),
            document,
            diagnostics,
        )?;

        let surviving = flattened
            .packages
            .keys()
            .filter(|id| **id != ComponentId::Root)
            .count();
        let document = RelationshipEmitter::emit(flattened)?;
        Ok((document, surviving))
    }

    /// Logs and clears the collected diagnostics, returning (warnings, errors)
    fn forward_diagnostics(&self, diagnostics: &mut Diagnostics) -> (usize, usize) {
        let warnings = diagnostics.count(Severity::Warn);
        let errors = diagnostics.count(Severity::Error);
        for diagnostic in diagnostics.drain() {
            self.diagnostic_logger.log(&diagnostic);
        }
        (warnings, errors)
    }

    fn warn_unmatched_patterns(&self, filter: &ProjectFilter) {
        for pattern in filter.unmatched_patterns() {
            self.diagnostic_logger.warn(&format!(
                "exclude pattern '{}' did not match any project",
                pattern
            ));
        }
    }
}
