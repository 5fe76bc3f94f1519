use super::build_info::{PomInfo, ProjectInfo, ScmInfo, UberPackageInfo};
use super::component::{ComponentId, ResolvedGraph};
use std::collections::HashMap;
use std::path::PathBuf;

/// One entry of the resolver's raw identity -> file mapping.
///
/// Several artifacts may point at the same component (classifiers, marker
/// files), which is why this is a list and not a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArtifact {
    pub component: ComponentId,
    pub file: PathBuf,
}

impl RawArtifact {
    pub fn new(component: ComponentId, file: impl Into<PathBuf>) -> Self {
        Self {
            component,
            file: file.into(),
        }
    }
}

/// Document settings carried by the resolution report itself; every field
/// can be overridden by configuration or CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDefaults {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub creator: Option<String>,
    pub supplier: Option<String>,
    pub uber_package: Option<UberPackageInfo>,
}

/// Everything the build tool hands over for one SBOM run
#[derive(Debug, Clone)]
pub struct BuildResolution {
    pub graph: ResolvedGraph,
    pub artifacts: Vec<RawArtifact>,
    /// POM metadata keyed by component display name
    pub poms: HashMap<String, PomInfo>,
    /// Repository id -> repository URI
    pub repositories: HashMap<String, String>,
    pub projects: Vec<ProjectInfo>,
    pub scm: ScmInfo,
    pub document: DocumentDefaults,
}

impl BuildResolution {
    pub fn new(graph: ResolvedGraph) -> Self {
        Self {
            graph,
            artifacts: Vec::new(),
            poms: HashMap::new(),
            repositories: HashMap::new(),
            projects: Vec::new(),
            scm: ScmInfo::default(),
            document: DocumentDefaults::default(),
        }
    }

    /// Project registry keyed by project path
    pub fn project_registry(&self) -> HashMap<String, ProjectInfo> {
        self.projects
            .iter()
            .map(|p| (p.path.clone(), p.clone()))
            .collect()
    }

    /// The project the graph root belongs to, if the root is a project
    pub fn root_project(&self) -> Option<&ProjectInfo> {
        match self.graph.root_id() {
            ComponentId::Project { path } => self.projects.iter().find(|p| &p.path == path),
            _ => None,
        }
    }
}
