use gradle_spdx_sbom::prelude::*;
use gradle_spdx_sbom::sbom_generation::domain::{PomInfo, ProjectInfo, RawArtifact};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MAVEN_REPO: &str = "MavenRepo";
pub const MAVEN_CENTRAL: &str = "https://repo.maven.apache.org/maven2";

/// In-memory ResolutionReader; materialized artifacts are real files in a temp dir
pub struct MockResolutionReader {
    resolution: BuildResolution,
    dir: TempDir,
}

impl MockResolutionReader {
    /// Every project in `components` is registered with version 1.0.0
    pub fn new(root: ComponentId, components: Vec<ResolvedComponent>) -> Self {
        let projects = components
            .iter()
            .filter_map(|c| match &c.id {
                ComponentId::Project { path } => {
                    let name = path.rsplit(':').next().filter(|n| !n.is_empty()).unwrap_or("app");
                    Some(ProjectInfo::new(path.clone(), name, "1.0.0"))
                }
                _ => None,
            })
            .collect();

        let graph = ResolvedGraph::new(root, components).unwrap();
        let mut resolution = BuildResolution::new(graph);
        resolution.projects = projects;
        resolution.repositories =
            HashMap::from([(MAVEN_REPO.to_string(), MAVEN_CENTRAL.to_string())]);

        Self {
            resolution,
            dir: TempDir::new().unwrap(),
        }
    }

    /// Writes a file for `id` and registers it as its artifact
    pub fn with_artifact(mut self, id: ComponentId, file_name: &str) -> Self {
        let path = self.write_file(file_name);
        self.resolution.artifacts.push(RawArtifact::new(id.clone(), path));
        self.resolution
            .poms
            .entry(id.display_name())
            .or_insert_with(PomInfo::default);
        self
    }

    pub fn with_pom(mut self, id: &ComponentId, pom: PomInfo) -> Self {
        self.resolution.poms.insert(id.display_name(), pom);
        self
    }

    pub fn with_repository(mut self, id: &str, uri: &str) -> Self {
        self.resolution
            .repositories
            .insert(id.to_string(), uri.to_string());
        self
    }

    pub fn with_resolution(mut self, edit: impl FnOnce(&mut BuildResolution)) -> Self {
        edit(&mut self.resolution);
        self
    }

    pub fn artifact_dir(&self) -> &Path {
        self.dir.path()
    }

    fn write_file(&self, file_name: &str) -> PathBuf {
        let path = self.dir.path().join(file_name);
        std::fs::write(&path, file_name.as_bytes()).unwrap();
        path
    }
}

impl ResolutionReader for MockResolutionReader {
    fn read_resolution(&self, _path: &Path) -> Result<BuildResolution> {
        Ok(self.resolution.clone())
    }
}
