use crate::sbom_generation::domain::{DocumentInfo, SbomMetadata};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// SbomGenerator service for generating SBOM document metadata
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates document metadata stamped with the current UTC time
    ///
    /// The tool is always the first creator; a configured creator follows it.
    pub fn generate_metadata(
        document: &DocumentInfo,
        tool_name: &str,
        tool_version: &str,
    ) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut creators = vec![format!("Tool: {}-{}", tool_name, tool_version)];
        if let Some(creator) = document.creator.as_deref().filter(|c| !c.trim().is_empty()) {
            creators.push(creator.to_string());
        }

        SbomMetadata::new(
            document.name.clone(),
            document.namespace.clone(),
            creators,
            timestamp,
        )
    }

    /// Generates metadata with this tool's name and compile-time version
    pub fn generate_default_metadata(document: &DocumentInfo) -> SbomMetadata {
        Self::generate_metadata(document, env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// A fresh, unique document namespace for `name`, percent-encoded into the URI
    pub fn default_namespace(name: &str) -> String {
        format!(
            "https://spdx.org/spdxdocs/{}-{}",
            urlencoding::encode(name),
            Uuid::new_v4()
        )
    }
}
