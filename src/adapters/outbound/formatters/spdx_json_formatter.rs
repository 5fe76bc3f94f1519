use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    ExtractedLicense, PackageRecord, Relationship, SbomDocument, SpdxId,
};
use crate::shared::Result;
use serde::Serialize;

const SPDX_VERSION: &str = "SPDX-2.3";
const DATA_LICENSE: &str = "CC0-1.0";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    spdx_version: &'static str,
    data_license: &'static str,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    document_describes: Vec<String>,
    packages: Vec<Package>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    has_extracted_licensing_infos: Vec<ExtractedLicensingInfo>,
    relationships: Vec<RelationshipEntry>,
}

#[derive(Debug, Serialize)]
struct CreationInfo {
    creators: Vec<String>,
    created: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Package {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    version_info: String,
    supplier: String,
    download_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<String>,
    files_analyzed: bool,
    license_concluded: String,
    license_declared: String,
    copyright_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    checksums: Vec<ChecksumEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_refs: Vec<ExternalRefEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChecksumEntry {
    algorithm: String,
    checksum_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRefEntry {
    reference_category: String,
    reference_type: String,
    reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractedLicensingInfo {
    license_id: String,
    name: String,
    extracted_text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    see_alsos: Vec<String>,
}

impl From<&ExtractedLicense> for ExtractedLicensingInfo {
    fn from(license: &ExtractedLicense) -> Self {
        Self {
            license_id: license.license_id.clone(),
            name: license.name.clone(),
            extracted_text: license.extracted_text.clone(),
            see_alsos: license.see_also.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelationshipEntry {
    spdx_element_id: String,
    relationship_type: String,
    related_spdx_element: String,
}

impl From<&Relationship> for RelationshipEntry {
    fn from(relationship: &Relationship) -> Self {
        Self {
            spdx_element_id: relationship.element.to_string(),
            relationship_type: relationship.relationship_type.to_string(),
            related_spdx_element: relationship.related.to_string(),
        }
    }
}

/// SpdxJsonFormatter adapter for generating SPDX 2.3 JSON documents
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_package(&self, package: &PackageRecord) -> Package {
        Package {
            spdx_id: package.spdx_id.to_string(),
            name: package.name.clone(),
            version_info: package.version.clone(),
            supplier: package.supplier.clone(),
            download_location: package.download_location.clone(),
            homepage: package.homepage.clone(),
            files_analyzed: package.files_analyzed,
            license_concluded: package.license_concluded.clone(),
            license_declared: package.license_declared.clone(),
            copyright_text: package.copyright_text.clone(),
            source_info: package.source_info.clone(),
            description: package.description.clone().filter(|d| !d.is_empty()),
            checksums: package
                .checksums
                .iter()
                .map(|c| ChecksumEntry {
                    algorithm: c.algorithm.to_string(),
                    checksum_value: c.value.clone(),
                })
                .collect(),
            external_refs: package
                .external_ref
                .iter()
                .map(|r| ExternalRefEntry {
                    reference_category: r.category.clone(),
                    reference_type: r.reference_type.clone(),
                    reference_locator: r.locator.clone(),
                })
                .collect(),
        }
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, document: &SbomDocument) -> Result<String> {
        let metadata = document.metadata();

        let relationships = document
            .describes_relationship()
            .iter()
            .map(RelationshipEntry::from)
            .chain(document.relationships().map(RelationshipEntry::from))
            .collect();

        let spdx = Document {
            spdx_version: SPDX_VERSION,
            data_license: DATA_LICENSE,
            spdx_id: SpdxId::document().to_string(),
            name: metadata.name().to_string(),
            document_namespace: metadata.namespace().to_string(),
            creation_info: CreationInfo {
                creators: metadata.creators().to_vec(),
                created: metadata.created().to_string(),
            },
            document_describes: document.describes().map(|id| id.to_string()).into_iter().collect(),
            packages: document.packages().map(|p| self.build_package(p)).collect(),
            has_extracted_licensing_infos: document
                .extracted_licenses()
                .map(ExtractedLicensingInfo::from)
                .collect(),
            relationships,
        };

        serde_json::to_string_pretty(&spdx).map_err(Into::into)
    }
}
