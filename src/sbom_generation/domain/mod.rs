pub mod build_info;
pub mod component;
pub mod diagnostics;
pub mod document;
pub mod package;
pub mod resolution;
pub mod sbom_metadata;

pub use build_info::{
    DeveloperInfo, DocumentInfo, OrganizationInfo, PomInfo, PomLicense, ProjectInfo, ScmInfo,
    UberPackageInfo,
};
pub use component::{
    ComponentId, DependencyEdge, ModuleCoordinates, ResolvedComponent, ResolvedGraph,
};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use document::{Relationship, RelationshipType, SbomDocument};
pub use package::{
    Checksum, ChecksumAlgorithm, ExternalRef, ExtractedLicense, PackageRecord, SpdxId,
    NO_ASSERTION,
};
pub use resolution::{BuildResolution, DocumentDefaults, RawArtifact};
pub use sbom_metadata::SbomMetadata;
