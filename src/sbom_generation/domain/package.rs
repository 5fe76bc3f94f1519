use super::document::Relationship;
use crate::shared::Result;

/// Sentinel used wherever SPDX requires a value that cannot be determined
pub const NO_ASSERTION: &str = "NOASSERTION";

const SPDX_REF_PREFIX: &str = "SPDXRef-";

/// NewType wrapper for a document-scoped SPDX element identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpdxId(String);

impl SpdxId {
    pub fn new(id: String) -> Result<Self> {
        let Some(suffix) = id.strip_prefix(SPDX_REF_PREFIX) else {
            anyhow::bail!("SPDX identifier must start with '{}': {}", SPDX_REF_PREFIX, id);
        };

        if suffix.is_empty() {
            anyhow::bail!("SPDX identifier has an empty suffix");
        }

        // idstring = 1*(ALPHA / DIGIT / "-" / ".")
        if !suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            anyhow::bail!(
                "SPDX identifier contains invalid characters. Only letters, digits, '-' and '.' are allowed: {}",
                id
            );
        }

        Ok(Self(id))
    }

    /// The identifier of the document itself
    pub fn document() -> Self {
        Self("SPDXRef-DOCUMENT".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpdxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    Sha1,
    Sha256,
}

impl std::fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecksumAlgorithm::Sha1 => write!(f, "SHA1"),
            ChecksumAlgorithm::Sha256 => write!(f, "SHA256"),
        }
    }
}

/// Digest of an artifact, hex encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    pub value: String,
}

impl Checksum {
    pub fn new(algorithm: ChecksumAlgorithm, value: impl Into<String>) -> Self {
        Self {
            algorithm,
            value: value.into(),
        }
    }
}

/// Package-manager reference (purl) attached to a module package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRef {
    pub category: String,
    pub reference_type: String,
    pub locator: String,
}

impl ExternalRef {
    pub fn purl(locator: impl Into<String>) -> Self {
        Self {
            category: "PACKAGE-MANAGER".to_string(),
            reference_type: "purl".to_string(),
            locator: locator.into(),
        }
    }
}

/// A `LicenseRef-` minted for a license outside the SPDX list.
///
/// Every such id used by a package must be declared once on the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLicense {
    pub license_id: String,
    pub name: String,
    pub extracted_text: String,
    pub see_also: Vec<String>,
}

/// A package of the SBOM document.
///
/// Created once during the walk; only `relationships` is touched afterwards,
/// when depends-on edges are emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    pub spdx_id: SpdxId,
    pub name: String,
    pub version: String,
    pub supplier: String,
    pub license_concluded: String,
    pub license_declared: String,
    pub copyright_text: String,
    pub download_location: String,
    pub homepage: Option<String>,
    /// Source-control location; used for project packages
    pub source_info: Option<String>,
    pub description: Option<String>,
    pub checksums: Vec<Checksum>,
    pub external_ref: Option<ExternalRef>,
    /// Always false: no file-level analysis is performed
    pub files_analyzed: bool,
    pub relationships: Vec<Relationship>,
}

impl PackageRecord {
    /// A package whose every optional field is NOASSERTION / empty
    pub fn new(spdx_id: SpdxId, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            spdx_id,
            name: name.into(),
            version: version.into(),
            supplier: NO_ASSERTION.to_string(),
            license_concluded: NO_ASSERTION.to_string(),
            license_declared: NO_ASSERTION.to_string(),
            copyright_text: NO_ASSERTION.to_string(),
            download_location: NO_ASSERTION.to_string(),
            homepage: None,
            source_info: None,
            description: None,
            checksums: Vec::new(),
            external_ref: None,
            files_analyzed: false,
            relationships: Vec::new(),
        }
    }

    pub fn checksum(&self, algorithm: ChecksumAlgorithm) -> Option<&str> {
        self.checksums
            .iter()
            .find(|c| c.algorithm == algorithm)
            .map(|c| c.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spdx_id_new_valid() {
        let id = SpdxId::new("SPDXRef-gnrtd0".to_string()).unwrap();
        assert_eq!(id.as_str(), "SPDXRef-gnrtd0");
        assert_eq!(format!("{}", id), "SPDXRef-gnrtd0");
    }

    #[test]
    fn test_spdx_id_requires_prefix() {
        assert!(SpdxId::new("gnrtd0".to_string()).is_err());
        assert!(SpdxId::new("SPDXRef-".to_string()).is_err());
    }

    #[test]
    fn test_spdx_id_rejects_invalid_characters() {
        assert!(SpdxId::new("SPDXRef-com.acme:widget".to_string()).is_err());
        assert!(SpdxId::new("SPDXRef-has space".to_string()).is_err());
    }

    #[test]
    fn test_package_record_defaults() {
        let pkg = PackageRecord::new(
            SpdxId::new("SPDXRef-gnrtd1".to_string()).unwrap(),
            "com.acme:widget",
            "1.0",
        );
        assert_eq!(pkg.supplier, NO_ASSERTION);
        assert_eq!(pkg.download_location, NO_ASSERTION);
        assert_eq!(pkg.license_declared, NO_ASSERTION);
        assert!(!pkg.files_analyzed);
        assert!(pkg.checksums.is_empty());
        assert!(pkg.external_ref.is_none());
    }

    #[test]
    fn test_checksum_lookup_by_algorithm() {
        let mut pkg = PackageRecord::new(SpdxId::document(), "n", "1");
        pkg.checksums = vec![
            Checksum::new(ChecksumAlgorithm::Sha1, "aa"),
            Checksum::new(ChecksumAlgorithm::Sha256, "bb"),
        ];
        assert_eq!(pkg.checksum(ChecksumAlgorithm::Sha1), Some("aa"));
        assert_eq!(pkg.checksum(ChecksumAlgorithm::Sha256), Some("bb"));
    }

    #[test]
    fn test_checksum_algorithm_display() {
        assert_eq!(ChecksumAlgorithm::Sha1.to_string(), "SHA1");
        assert_eq!(ChecksumAlgorithm::Sha256.to_string(), "SHA256");
    }

    #[test]
    fn test_external_ref_purl() {
        let r = ExternalRef::purl("pkg:maven/g/n@1");
        assert_eq!(r.category, "PACKAGE-MANAGER");
        assert_eq!(r.reference_type, "purl");
    }
}
