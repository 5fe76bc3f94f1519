use crate::sbom_generation::domain::{ComponentId, Diagnostics, RawArtifact};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Package-manager marker artifacts that never carry a dependency payload
pub const DEFAULT_PLACEHOLDER_EXTENSIONS: &[&str] = &[".rip"];

/// ArtifactIndex - resolved component identity -> local artifact file
///
/// Built once per run. Project artifacts are dropped (projects are described
/// from the project registry), as are placeholder files; identities that
/// collide keep their first file.
#[derive(Debug, Clone, Default)]
pub struct ArtifactIndex {
    files: IndexMap<ComponentId, PathBuf>,
}

impl ArtifactIndex {
    pub fn build(
        raw: &[RawArtifact],
        placeholder_extensions: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let mut files: IndexMap<ComponentId, PathBuf> = IndexMap::new();

        for artifact in raw {
            if artifact.component.is_project() {
                continue;
            }
            if is_placeholder(&artifact.file, placeholder_extensions) {
                continue;
            }

            match files.get(&artifact.component) {
                Some(existing) if existing != &artifact.file => {
                    diagnostics.warn(format!(
                        "Conflict detected: cannot merge duplicate {} and {}",
                        existing.display(),
                        artifact.file.display()
                    ));
                }
                Some(_) => {}
                None => {
                    files.insert(artifact.component.clone(), artifact.file.clone());
                }
            }
        }

        Self { files }
    }

    pub fn get(&self, id: &ComponentId) -> Option<&Path> {
        self.files.get(id).map(PathBuf::as_path)
    }

    /// Indexed files in first-seen order
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.values().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_placeholder(file: &Path, placeholder_extensions: &[String]) -> bool {
    let Some(file_name) = file.file_name() else {
        return false;
    };
    let file_name = file_name.to_string_lossy();
    placeholder_extensions
        .iter()
        .any(|suffix| file_name.ends_with(suffix.as_str()))
}
