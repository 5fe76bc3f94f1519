use crate::sbom_generation::domain::{DocumentDefaults, ScmInfo};
use crate::sbom_generation::policies::RepositoryMapping;
use crate::sbom_generation::services::{MissingModuleVersion, DEFAULT_PLACEHOLDER_EXTENSIONS};
use crate::shared::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Default number of artifacts hashed at the same time
pub const DEFAULT_CHECKSUM_CONCURRENCY: usize = 8;

/// SbomRequest - Internal request DTO for the SBOM generation use case
///
/// Holds the CLI flags already merged with the configuration file.
/// Document fields left unset here fall back to the report's own defaults.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the resolution report
    pub input_path: PathBuf,
    /// Document settings that override the report
    pub document: DocumentDefaults,
    /// Patterns for excluding build projects from the SBOM
    pub exclude_projects: Vec<String>,
    /// Project path -> source-control info used instead of the build's
    pub scm_overrides: HashMap<String, ScmInfo>,
    pub repository_mappings: Vec<RepositoryMapping>,
    /// File suffixes of artifacts that are never real dependency payloads
    pub placeholder_extensions: Vec<String>,
    pub missing_module_version: MissingModuleVersion,
    pub checksum_concurrency: usize,
}

impl SbomRequest {
    pub fn builder() -> SbomRequestBuilder {
        SbomRequestBuilder::default()
    }
}

/// Builder for [`SbomRequest`]
#[derive(Debug, Default)]
pub struct SbomRequestBuilder {
    input_path: Option<PathBuf>,
    document: DocumentDefaults,
    exclude_projects: Vec<String>,
    scm_overrides: HashMap<String, ScmInfo>,
    repository_mappings: Vec<RepositoryMapping>,
    placeholder_extensions: Option<Vec<String>>,
    missing_module_version: MissingModuleVersion,
    checksum_concurrency: Option<usize>,
}

impl SbomRequestBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn document(mut self, document: DocumentDefaults) -> Self {
        self.document = document;
        self
    }

    pub fn exclude_projects(mut self, patterns: Vec<String>) -> Self {
        self.exclude_projects = patterns;
        self
    }

    pub fn scm_overrides(mut self, overrides: HashMap<String, ScmInfo>) -> Self {
        self.scm_overrides = overrides;
        self
    }

    pub fn repository_mappings(mut self, mappings: Vec<RepositoryMapping>) -> Self {
        self.repository_mappings = mappings;
        self
    }

    pub fn placeholder_extensions(mut self, extensions: Vec<String>) -> Self {
        self.placeholder_extensions = Some(extensions);
        self
    }

    pub fn missing_module_version(mut self, behavior: MissingModuleVersion) -> Self {
        self.missing_module_version = behavior;
        self
    }

    pub fn checksum_concurrency(mut self, concurrency: usize) -> Self {
        self.checksum_concurrency = Some(concurrency);
        self
    }

    pub fn build(self) -> Result<SbomRequest> {
        let input_path = self
            .input_path
            .ok_or_else(|| anyhow::anyhow!("input_path is required"))?;

        let checksum_concurrency = self
            .checksum_concurrency
            .unwrap_or(DEFAULT_CHECKSUM_CONCURRENCY);
        if checksum_concurrency == 0 {
            anyhow::bail!("checksum concurrency must be at least 1");
        }

        let placeholder_extensions = self.placeholder_extensions.unwrap_or_else(|| {
            DEFAULT_PLACEHOLDER_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        Ok(SbomRequest {
            input_path,
            document: self.document,
            exclude_projects: self.exclude_projects,
            scm_overrides: self.scm_overrides,
            repository_mappings: self.repository_mappings,
            placeholder_extensions,
            missing_module_version: self.missing_module_version,
            checksum_concurrency,
        })
    }
}
