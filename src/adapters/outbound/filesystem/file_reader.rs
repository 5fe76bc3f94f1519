use crate::ports::outbound::ResolutionReader;
use crate::sbom_generation::domain::{
    BuildResolution, ComponentId, DependencyEdge, DeveloperInfo, DocumentDefaults,
    ModuleCoordinates, OrganizationInfo, PomInfo, PomLicense, ProjectInfo, RawArtifact,
    ResolvedComponent, ResolvedGraph, ScmInfo, UberPackageInfo,
};
use crate::shared::error::SbomError;
use crate::shared::security::{validate_input_file, MAX_REPORT_SIZE};
use crate::shared::Result;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading resolution reports from disk
///
/// The JSON wire format is private to this adapter; it is converted into
/// domain types before anything else sees it. Relative artifact paths are
/// resolved against the report's directory.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(content: &str, path: &Path) -> Result<BuildResolution> {
        let parse_error = |details: String| SbomError::ReportParseError {
            path: path.to_path_buf(),
            details,
        };

        let report: ReportDto =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        report
            .into_domain(base_dir)
            .map_err(|e| parse_error(e.to_string()).into())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionReader for FileSystemReader {
    fn read_resolution(&self, path: &Path) -> Result<BuildResolution> {
        if !path.exists() {
            return Err(SbomError::ReportNotFound {
                path: path.to_path_buf(),
                suggestion: "Export the resolved dependency graph first, or specify the report with the --input option.".to_string(),
            }
            .into());
        }

        validate_input_file(path, "resolution report", MAX_REPORT_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::parse(&content, path)
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
fn explicit_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum IdentityDto {
    Project {
        path: String,
    },
    Module {
        group: String,
        name: String,
        version: String,
    },
    Root,
}

impl From<IdentityDto> for ComponentId {
    fn from(dto: IdentityDto) -> Self {
        match dto {
            IdentityDto::Project { path } => ComponentId::Project { path },
            IdentityDto::Module {
                group,
                name,
                version,
            } => ComponentId::module(group, name, version),
            IdentityDto::Root => ComponentId::Root,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CoordinatesDto {
    group: String,
    name: String,
    version: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EdgeDto {
    Resolved(IdentityDto),
    Unresolved(String),
}

#[derive(Debug, Deserialize)]
struct ComponentDto {
    id: IdentityDto,
    /// Absent: taken from a module id. `null`: the resolver lost it.
    #[serde(default, deserialize_with = "explicit_null")]
    module_version: Option<Option<CoordinatesDto>>,
    #[serde(default)]
    repository_id: Option<String>,
    #[serde(default)]
    dependencies: Vec<EdgeDto>,
}

#[derive(Debug, Deserialize)]
struct ArtifactDto {
    component: IdentityDto,
    file: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct PomDto {
    #[serde(default)]
    licenses: Vec<LicenseDto>,
    homepage: Option<String>,
    organization: Option<OrganizationDto>,
    #[serde(default)]
    developers: Vec<DeveloperDto>,
}

#[derive(Debug, Deserialize)]
struct LicenseDto {
    name: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganizationDto {
    name: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeveloperDto {
    name: Option<String>,
    email: Option<String>,
    organization: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectDto {
    path: String,
    name: String,
    version: String,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ScmDto {
    uri: Option<String>,
    revision: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UberPackageDto {
    name: String,
    version: String,
    supplier: String,
}

#[derive(Debug, Default, Deserialize)]
struct DocumentDto {
    name: Option<String>,
    namespace: Option<String>,
    creator: Option<String>,
    supplier: Option<String>,
    uber_package: Option<UberPackageDto>,
}

#[derive(Debug, Deserialize)]
struct ReportDto {
    root: IdentityDto,
    components: Vec<ComponentDto>,
    #[serde(default)]
    artifacts: Vec<ArtifactDto>,
    #[serde(default)]
    poms: HashMap<String, PomDto>,
    #[serde(default)]
    repositories: HashMap<String, String>,
    #[serde(default)]
    projects: Vec<ProjectDto>,
    #[serde(default)]
    scm: Option<ScmDto>,
    #[serde(default)]
    document: Option<DocumentDto>,
}

impl ReportDto {
    fn into_domain(self, base_dir: &Path) -> Result<BuildResolution> {
        let components = self
            .components
            .into_iter()
            .map(ComponentDto::into_domain)
            .collect();
        let graph = ResolvedGraph::new(self.root.into(), components)?;

        let mut resolution = BuildResolution::new(graph);
        resolution.artifacts = self
            .artifacts
            .into_iter()
            .map(|artifact| {
                let file = if artifact.file.is_absolute() {
                    artifact.file
                } else {
                    base_dir.join(artifact.file)
                };
                RawArtifact::new(artifact.component.into(), file)
            })
            .collect();
        resolution.poms = self
            .poms
            .into_iter()
            .map(|(key, pom)| (key, pom.into_domain()))
            .collect();
        resolution.repositories = self.repositories;
        resolution.projects = self
            .projects
            .into_iter()
            .map(|p| ProjectInfo {
                path: p.path,
                name: p.name,
                version: p.version,
                description: p.description,
            })
            .collect();
        let scm = self.scm.unwrap_or_default();
        resolution.scm = ScmInfo::new(scm.uri, scm.revision);

        let document = self.document.unwrap_or_default();
        resolution.document = DocumentDefaults {
            name: document.name,
            namespace: document.namespace,
            creator: document.creator,
            supplier: document.supplier,
            uber_package: document.uber_package.map(|uber| UberPackageInfo {
                name: uber.name,
                version: uber.version,
                supplier: uber.supplier,
            }),
        };

        Ok(resolution)
    }
}

impl ComponentDto {
    fn into_domain(self) -> ResolvedComponent {
        let mut component = ResolvedComponent::new(self.id.into());
        if let Some(module_version) = self.module_version {
            component = component.with_module_version(
                module_version.map(|c| ModuleCoordinates::new(c.group, c.name, c.version)),
            );
        }
        component.repository_id = self.repository_id;
        component.dependencies = self
            .dependencies
            .into_iter()
            .map(|edge| match edge {
                EdgeDto::Resolved(id) => DependencyEdge::Resolved(id.into()),
                EdgeDto::Unresolved(requested) => DependencyEdge::Unresolved { requested },
            })
            .collect();
        component
    }
}

impl PomDto {
    fn into_domain(self) -> PomInfo {
        PomInfo {
            licenses: self
                .licenses
                .into_iter()
                .map(|l| PomLicense {
                    name: l.name,
                    url: l.url,
                })
                .collect(),
            homepage: self.homepage,
            organization: self.organization.map(|o| OrganizationInfo {
                name: o.name,
                url: o.url,
            }),
            developers: self
                .developers
                .into_iter()
                .map(|d| DeveloperInfo {
                    name: d.name,
                    email: d.email,
                    organization: d.organization,
                })
                .collect(),
        }
    }
}
