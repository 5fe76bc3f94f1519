use super::package::{ExtractedLicense, PackageRecord, SpdxId};
use super::sbom_metadata::SbomMetadata;
use crate::shared::Result;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    Describes,
    DependsOn,
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationshipType::Describes => write!(f, "DESCRIBES"),
            RelationshipType::DependsOn => write!(f, "DEPENDS_ON"),
        }
    }
}

/// A directed relationship between two SPDX elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub element: SpdxId,
    pub relationship_type: RelationshipType,
    pub related: SpdxId,
}

impl Relationship {
    pub fn depends_on(element: SpdxId, related: SpdxId) -> Self {
        Self {
            element,
            relationship_type: RelationshipType::DependsOn,
            related,
        }
    }
}

/// The SBOM document being assembled.
///
/// Acts as the metadata store of the walk: it allocates package identifiers
/// (monotonic per document) and owns every package record.
#[derive(Debug, Clone)]
pub struct SbomDocument {
    metadata: SbomMetadata,
    packages: IndexMap<SpdxId, PackageRecord>,
    describes: Option<SpdxId>,
    extracted_licenses: IndexMap<String, ExtractedLicense>,
    next_id: u64,
}

impl SbomDocument {
    pub fn new(metadata: SbomMetadata) -> Self {
        Self {
            metadata,
            packages: IndexMap::new(),
            describes: None,
            extracted_licenses: IndexMap::new(),
            next_id: 0,
        }
    }

    pub fn metadata(&self) -> &SbomMetadata {
        &self.metadata
    }

    /// Allocates the next document-scoped package identifier
    pub fn next_spdx_id(&mut self) -> Result<SpdxId> {
        let id = SpdxId::new(format!("SPDXRef-gnrtd{}", self.next_id))?;
        self.next_id += 1;
        Ok(id)
    }

    pub fn add_package(&mut self, package: PackageRecord) -> SpdxId {
        let id = package.spdx_id.clone();
        self.packages.insert(id.clone(), package);
        id
    }

    pub fn package(&self, id: &SpdxId) -> Option<&PackageRecord> {
        self.packages.get(id)
    }

    pub fn package_mut(&mut self, id: &SpdxId) -> Option<&mut PackageRecord> {
        self.packages.get_mut(id)
    }

    /// Packages in creation order
    pub fn packages(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages.values()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Replaces the describes target; a document describes exactly one package
    pub fn set_describes(&mut self, id: SpdxId) {
        self.describes = Some(id);
    }

    pub fn describes(&self) -> Option<&SpdxId> {
        self.describes.as_ref()
    }

    /// The document-level DESCRIBES relationship, if a root has been set
    pub fn describes_relationship(&self) -> Option<Relationship> {
        self.describes.as_ref().map(|root| Relationship {
            element: SpdxId::document(),
            relationship_type: RelationshipType::Describes,
            related: root.clone(),
        })
    }

    /// Declares a custom license reference; the first declaration of an id wins
    pub fn declare_license(&mut self, license: ExtractedLicense) {
        self.extracted_licenses
            .entry(license.license_id.clone())
            .or_insert(license);
    }

    /// Declared license references in first-use order
    pub fn extracted_licenses(&self) -> impl Iterator<Item = &ExtractedLicense> {
        self.extracted_licenses.values()
    }

    /// Every package-attached relationship, in package then emission order
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.packages.values().flat_map(|p| p.relationships.iter())
    }
}
