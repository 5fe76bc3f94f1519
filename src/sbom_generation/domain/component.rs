use crate::shared::error::SbomError;
use crate::shared::Result;
use indexmap::IndexMap;
use std::fmt;

/// Group / name / version triple of an externally resolved module
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleCoordinates {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ModuleCoordinates {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ModuleCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// Identity of one node in the resolved dependency graph.
///
/// This is the only key used for deduplication, so equality must be exact:
/// two module identities are the same node iff group, name and version match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// A project that is part of the same build
    Project { path: String },
    /// An externally resolved module
    Module(ModuleCoordinates),
    /// Synthetic identity of the uber package that wraps the whole graph
    Root,
}

impl ComponentId {
    pub fn project(path: impl Into<String>) -> Self {
        ComponentId::Project { path: path.into() }
    }

    pub fn module(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        ComponentId::Module(ModuleCoordinates::new(group, name, version))
    }

    pub fn is_project(&self) -> bool {
        matches!(self, ComponentId::Project { .. })
    }

    /// Display name, also the key of the POM metadata lookup
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Project { path } => write!(f, "project {}", path),
            ComponentId::Module(coordinates) => write!(f, "{}", coordinates),
            ComponentId::Root => write!(f, "rootProject"),
        }
    }
}

/// Outgoing edge of a resolved component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyEdge {
    /// The resolver selected a concrete component for this edge
    Resolved(ComponentId),
    /// The edge failed to resolve; it is ignored by the walk
    Unresolved { requested: String },
}

/// One node of the resolved dependency graph, as delivered by the resolver
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    pub id: ComponentId,
    /// Module version reported by the resolver; may be missing even for modules
    pub module_version: Option<ModuleCoordinates>,
    /// Identifier of the repository the component was resolved from
    pub repository_id: Option<String>,
    pub dependencies: Vec<DependencyEdge>,
}

impl ResolvedComponent {
    pub fn new(id: ComponentId) -> Self {
        let module_version = match &id {
            ComponentId::Module(coordinates) => Some(coordinates.clone()),
            _ => None,
        };
        Self {
            id,
            module_version,
            repository_id: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_repository(mut self, repository_id: impl Into<String>) -> Self {
        self.repository_id = Some(repository_id.into());
        self
    }

    pub fn with_module_version(mut self, module_version: Option<ModuleCoordinates>) -> Self {
        self.module_version = module_version;
        self
    }

    pub fn depends_on(mut self, child: ComponentId) -> Self {
        self.dependencies.push(DependencyEdge::Resolved(child));
        self
    }

    /// Selected children in declaration order; unresolved edges are skipped
    pub fn resolved_dependencies(&self) -> impl Iterator<Item = &ComponentId> {
        self.dependencies.iter().filter_map(|edge| match edge {
            DependencyEdge::Resolved(id) => Some(id),
            DependencyEdge::Unresolved { .. } => None,
        })
    }
}

/// The resolved component graph: a root plus every reachable component.
///
/// The graph may contain diamonds and cycles; components are indexed by
/// identity in resolver order.
#[derive(Debug, Clone)]
pub struct ResolvedGraph {
    root: ComponentId,
    components: IndexMap<ComponentId, ResolvedComponent>,
}

impl ResolvedGraph {
    pub fn new(root: ComponentId, components: Vec<ResolvedComponent>) -> Result<Self> {
        let mut indexed = IndexMap::with_capacity(components.len());
        for component in components {
            if indexed.contains_key(&component.id) {
                return Err(SbomError::Validation {
                    message: format!("component {} is listed more than once", component.id),
                }
                .into());
            }
            indexed.insert(component.id.clone(), component);
        }

        Ok(Self {
            root,
            components: indexed,
        })
    }

    pub fn root_id(&self) -> &ComponentId {
        &self.root
    }

    /// Looks up a component; a dangling edge is a resolver contract violation
    pub fn component(&self, id: &ComponentId) -> Result<&ResolvedComponent> {
        self.components.get(id).ok_or_else(|| {
            SbomError::UnknownComponent {
                component: id.to_string(),
            }
            .into()
        })
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_display_names() {
        assert_eq!(ComponentId::project(":app").display_name(), "project :app");
        assert_eq!(
            ComponentId::module("com.google.guava", "guava", "33.0.0").display_name(),
            "com.google.guava:guava:33.0.0"
        );
        assert_eq!(ComponentId::Root.display_name(), "rootProject");
    }

    #[test]
    fn test_component_id_equality_is_structural() {
        assert_eq!(
            ComponentId::module("g", "n", "1"),
            ComponentId::module("g", "n", "1")
        );
        assert_ne!(
            ComponentId::module("g", "n", "1"),
            ComponentId::module("g", "n", "2")
        );
        assert_ne!(ComponentId::project(":a"), ComponentId::project(":b"));
    }

    #[test]
    fn test_module_component_defaults_module_version_to_its_coordinates() {
        let component = ResolvedComponent::new(ComponentId::module("g", "n", "1"));
        assert_eq!(
            component.module_version,
            Some(ModuleCoordinates::new("g", "n", "1"))
        );

        let project = ResolvedComponent::new(ComponentId::project(":app"));
        assert!(project.module_version.is_none());
    }

    #[test]
    fn test_resolved_dependencies_skip_unresolved_edges() {
        let mut component = ResolvedComponent::new(ComponentId::project(":app"))
            .depends_on(ComponentId::module("g", "a", "1"));
        component.dependencies.push(DependencyEdge::Unresolved {
            requested: "g:missing:1".to_string(),
        });
        component = component.depends_on(ComponentId::module("g", "b", "1"));

        let children: Vec<_> = component.resolved_dependencies().cloned().collect();
        assert_eq!(
            children,
            vec![
                ComponentId::module("g", "a", "1"),
                ComponentId::module("g", "b", "1")
            ]
        );
    }

    #[test]
    fn test_graph_rejects_duplicate_components() {
        let result = ResolvedGraph::new(
            ComponentId::project(":app"),
            vec![
                ResolvedComponent::new(ComponentId::project(":app")),
                ResolvedComponent::new(ComponentId::project(":app")),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_graph_lookup_of_unknown_component_fails() {
        let graph = ResolvedGraph::new(
            ComponentId::project(":app"),
            vec![ResolvedComponent::new(ComponentId::project(":app"))],
        )
        .unwrap();

        assert!(graph.component(graph.root_id()).is_ok());
        let err = graph
            .component(&ComponentId::module("g", "ghost", "1"))
            .unwrap_err();
        assert!(err.to_string().contains("g:ghost:1"));
        assert_eq!(graph.len(), 1);
    }
}
