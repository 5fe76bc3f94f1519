use super::graph_walker::FlattenedGraph;
use crate::sbom_generation::domain::{Relationship, SbomDocument};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// RelationshipEmitter - turns the walk's adjacency table into document relationships
pub struct RelationshipEmitter;

impl RelationshipEmitter {
    /// Sets the describes root, then attaches one DEPENDS_ON per adjacency pair
    /// to the parent package, in adjacency insertion order.
    pub fn emit(flattened: FlattenedGraph) -> Result<SbomDocument> {
        let FlattenedGraph {
            mut document,
            packages,
            adjacency,
            root,
        } = flattened;

        let root_id = packages
            .get(&root)
            .cloned()
            .ok_or_else(|| SbomError::MissingRootPackage {
                component: root.to_string(),
            })?;
        document.set_describes(root_id);

        for (parent, children) in &adjacency {
            let Some(parent_id) = packages.get(parent) else {
                continue;
            };
            let relationships: Vec<Relationship> = children
                .iter()
                .filter_map(|child| packages.get(child))
                .map(|child_id| Relationship::depends_on(parent_id.clone(), child_id.clone()))
                .collect();

            if let Some(package) = document.package_mut(parent_id) {
                package.relationships.extend(relationships);
            }
        }

        Ok(document)
    }
}
