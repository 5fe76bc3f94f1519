mod artifact_index;
mod checksum_calculator;
mod graph_walker;
mod locations;
mod package_factory;
mod relationship_emitter;
mod sbom_generator;

pub use artifact_index::{ArtifactIndex, DEFAULT_PLACEHOLDER_EXTENSIONS};
pub use checksum_calculator::ChecksumCalculator;
pub use graph_walker::{AdjacencyTable, FlattenedGraph, GraphWalker};
pub use locations::{download_location, purl, MAVEN_CENTRAL};
pub use package_factory::{
    MissingModuleVersion, PackageFactory, SynthesisContext, DEFAULT_PROJECT_SUPPLIER,
};
pub use relationship_emitter::RelationshipEmitter;
pub use sbom_generator::SbomGenerator;
