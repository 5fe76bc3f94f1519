use super::package_factory::PackageFactory;
use crate::sbom_generation::domain::{
    ComponentId, Diagnostics, ResolvedComponent, ResolvedGraph, SbomDocument, SpdxId,
    UberPackageInfo,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

/// Surviving identity -> ordered, duplicate-free children
pub type AdjacencyTable = IndexMap<ComponentId, IndexSet<ComponentId>>;

/// Result of one walk over the resolved graph
#[derive(Debug)]
pub struct FlattenedGraph {
    pub document: SbomDocument,
    /// Identity -> package id, for every identity that was not elided
    pub packages: IndexMap<ComponentId, SpdxId>,
    pub adjacency: AdjacencyTable,
    /// `ComponentId::Root` when an uber package wraps the graph, else the graph root
    pub root: ComponentId,
}

enum Frame {
    Enter {
        parent: Option<ComponentId>,
        id: ComponentId,
    },
    /// Leaves the active path once every child frame above it has been popped
    Exit(ComponentId),
}

#[derive(Default)]
struct WalkState {
    packages: IndexMap<ComponentId, SpdxId>,
    adjacency: AdjacencyTable,
    visited: HashSet<ComponentId>,
    active: HashSet<ComponentId>,
}

/// GraphWalker - flattens the resolved graph into packages plus a tree of edges.
///
/// Depth-first and pre-order: a node is settled (package created or elided)
/// before any of its children. Every identity is settled exactly once; an
/// elided node hands its parent down to its children.
pub struct GraphWalker<'f, 'a> {
    factory: &'f PackageFactory<'a>,
}

impl<'f, 'a> GraphWalker<'f, 'a> {
    pub fn new(factory: &'f PackageFactory<'a>) -> Self {
        Self { factory }
    }

    pub fn walk(
        &self,
        graph: &ResolvedGraph,
        uber_package: Option<&UberPackageInfo>,
        mut document: SbomDocument,
        diagnostics: &mut Diagnostics,
    ) -> Result<FlattenedGraph> {
        let mut state = WalkState::default();

        let root_parent = match uber_package {
            Some(info) => {
                let id = self.factory.create_uber(info, &mut document)?;
                state.packages.insert(ComponentId::Root, id);
                state.adjacency.insert(ComponentId::Root, IndexSet::new());
                Some(ComponentId::Root)
            }
            None => None,
        };
        let root = match root_parent {
            Some(_) => ComponentId::Root,
            None => graph.root_id().clone(),
        };

        let mut stack = vec![Frame::Enter {
            parent: root_parent,
            id: graph.root_id().clone(),
        }];

        while let Some(frame) = stack.pop() {
            let (parent, id) = match frame {
                Frame::Exit(id) => {
                    state.active.remove(&id);
                    continue;
                }
                Frame::Enter { parent, id } => (parent, id),
            };

            if state.visited.contains(&id) {
                link_revisited(&mut state, parent.as_ref(), &id);
                continue;
            }
            state.visited.insert(id.clone());

            let component = graph.component(&id)?;
            let created = self.maybe_add_package(
                parent.as_ref(),
                component,
                &mut state,
                &mut document,
                diagnostics,
            )?;
            let effective_parent = if created {
                Some(id.clone())
            } else {
                diagnostics.info(format!("ignoring: {}", id));
                parent
            };

            state.active.insert(id.clone());
            stack.push(Frame::Exit(id));
            let children: Vec<&ComponentId> = component.resolved_dependencies().collect();
            for child in children.into_iter().rev() {
                stack.push(Frame::Enter {
                    parent: effective_parent.clone(),
                    id: child.clone(),
                });
            }
        }

        Ok(FlattenedGraph {
            document,
            packages: state.packages,
            adjacency: state.adjacency,
            root,
        })
    }

    /// Returns whether `component` is represented by a package after the call
    fn maybe_add_package(
        &self,
        parent: Option<&ComponentId>,
        component: &ResolvedComponent,
        state: &mut WalkState,
        document: &mut SbomDocument,
        diagnostics: &mut Diagnostics,
    ) -> Result<bool> {
        if component.id == ComponentId::Root {
            return Err(SbomError::UnknownComponentKind {
                component: component.id.to_string(),
            }
            .into());
        }
        if state.packages.contains_key(&component.id) {
            return Ok(true);
        }

        let Some(spdx_id) = self.factory.create(component, document, diagnostics)? else {
            return Ok(false);
        };

        state.packages.insert(component.id.clone(), spdx_id);
        state.adjacency.insert(component.id.clone(), IndexSet::new());
        if let Some(parent) = parent {
            state
                .adjacency
                .entry(parent.clone())
                .or_default()
                .insert(component.id.clone());
        }
        Ok(true)
    }
}

/// Second path into a settled node: keep the parent's edge unless it would
/// form a self-loop or close a cycle through the active path.
///
/// The upstream Gradle SPDX plugin drops this edge (only the first parent of a
/// diamond gets one), so diamond-shaped graphs yield more DEPENDS_ON records here.
fn link_revisited(state: &mut WalkState, parent: Option<&ComponentId>, id: &ComponentId) {
    let Some(parent) = parent else {
        return;
    };
    if parent == id || state.active.contains(id) || !state.packages.contains_key(id) {
        return;
    }
    state
        .adjacency
        .entry(parent.clone())
        .or_default()
        .insert(id.clone());
}
