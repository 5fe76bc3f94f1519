use super::ProjectFilter;
use crate::sbom_generation::domain::{ModuleCoordinates, ProjectInfo, ScmInfo};
use std::collections::HashMap;

/// Extension point consulted while packages are synthesized.
///
/// Every method has the neutral behavior as its default, so an absent policy
/// is simply `DefaultPackagePolicy`.
pub trait PackagePolicy {
    /// Whether a build project becomes a package; excluded projects are elided
    fn should_create_package_for_project(&self, _project: &ProjectInfo) -> bool {
        true
    }

    /// Source-control info to use for a project's source location
    fn map_scm_for_project(&self, scm: &ScmInfo, _project: &ProjectInfo) -> ScmInfo {
        scm.clone()
    }

    /// Repository URI to use for a module's download location and purl
    fn map_repository_uri(
        &self,
        uri: Option<&str>,
        _module: &ModuleCoordinates,
    ) -> Option<String> {
        uri.map(String::from)
    }
}

/// Eligibility = true, no remapping
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPackagePolicy;

impl PackagePolicy for DefaultPackagePolicy {}

/// Rewrites repository URIs starting with `from` to start with `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryMapping {
    pub from: String,
    pub to: String,
}

/// Policy built from the configuration file and CLI flags
#[derive(Debug, Default)]
pub struct ConfiguredPackagePolicy {
    project_filter: ProjectFilter,
    scm_overrides: HashMap<String, ScmInfo>,
    repository_mappings: Vec<RepositoryMapping>,
}

impl ConfiguredPackagePolicy {
    pub fn new(
        project_filter: ProjectFilter,
        scm_overrides: HashMap<String, ScmInfo>,
        repository_mappings: Vec<RepositoryMapping>,
    ) -> Self {
        Self {
            project_filter,
            scm_overrides,
            repository_mappings,
        }
    }

    pub fn project_filter(&self) -> &ProjectFilter {
        &self.project_filter
    }
}

impl PackagePolicy for ConfiguredPackagePolicy {
    fn should_create_package_for_project(&self, project: &ProjectInfo) -> bool {
        !self.project_filter.excludes(project)
    }

    fn map_scm_for_project(&self, scm: &ScmInfo, project: &ProjectInfo) -> ScmInfo {
        self.scm_overrides
            .get(&project.path)
            .cloned()
            .unwrap_or_else(|| scm.clone())
    }

    fn map_repository_uri(
        &self,
        uri: Option<&str>,
        _module: &ModuleCoordinates,
    ) -> Option<String> {
        let uri = uri?;
        // First matching prefix wins
        let mapped = self.repository_mappings.iter().find_map(|mapping| {
            uri.strip_prefix(mapping.from.as_str())
                .map(|rest| format!("{}{}", mapping.to, rest))
        });
        Some(mapped.unwrap_or_else(|| uri.to_string()))
    }
}
