//! Configuration file support for gradle-spdx-sbom.
//!
//! Provides YAML-based configuration through `gradle-spdx-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::sbom_generation::domain::{DocumentDefaults, ScmInfo, UberPackageInfo};
use crate::sbom_generation::policies::RepositoryMapping;
use crate::sbom_generation::services::MissingModuleVersion;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "gradle-spdx-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub document: Option<DocumentConfig>,
    pub exclude_projects: Option<Vec<String>>,
    /// Project path -> source-control location used instead of the build's
    pub scm_overrides: Option<HashMap<String, ScmConfig>>,
    pub repository_mappings: Option<Vec<RepositoryMappingConfig>>,
    pub placeholder_extensions: Option<Vec<String>>,
    pub missing_module_version: Option<MissingModuleVersion>,
    pub checksum_concurrency: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct DocumentConfig {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub creator: Option<String>,
    pub supplier: Option<String>,
    pub uber_package: Option<UberPackageConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UberPackageConfig {
    pub name: String,
    pub version: String,
    pub supplier: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScmConfig {
    pub uri: Option<String>,
    pub revision: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RepositoryMappingConfig {
    pub from: String,
    pub to: String,
}

impl ConfigFile {
    pub fn document_defaults(&self) -> DocumentDefaults {
        let Some(document) = self.document.as_ref() else {
            return DocumentDefaults::default();
        };
        DocumentDefaults {
            name: document.name.clone(),
            namespace: document.namespace.clone(),
            creator: document.creator.clone(),
            supplier: document.supplier.clone(),
            uber_package: document.uber_package.as_ref().map(|uber| UberPackageInfo {
                name: uber.name.clone(),
                version: uber.version.clone(),
                supplier: uber.supplier.clone(),
            }),
        }
    }

    pub fn scm_overrides(&self) -> HashMap<String, ScmInfo> {
        self.scm_overrides
            .iter()
            .flatten()
            .map(|(path, scm)| {
                (
                    path.clone(),
                    ScmInfo::new(scm.uri.clone(), scm.revision.clone()),
                )
            })
            .collect()
    }

    pub fn repository_mappings(&self) -> Vec<RepositoryMapping> {
        self.repository_mappings
            .iter()
            .flatten()
            .map(|m| RepositoryMapping {
                from: m.from.clone(),
                to: m.to.clone(),
            })
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(uber) = config.document.as_ref().and_then(|d| d.uber_package.as_ref()) {
        if uber.name.trim().is_empty() || uber.version.trim().is_empty() {
            bail!(
                "Invalid config: document.uber_package needs a non-empty 'name' and 'version'.\n\n\
                 💡 Hint: Remove the uber_package block to describe the root project instead."
            );
        }
    }

    for (i, mapping) in config.repository_mappings.iter().flatten().enumerate() {
        if mapping.from.trim().is_empty() {
            bail!(
                "Invalid config: repository_mappings[{}].from must not be empty.\n\n\
                 💡 Hint: 'from' is the repository URI prefix to rewrite (e.g., \"https://repo1.maven.org/maven2\").",
                i
            );
        }
    }

    for path in config.scm_overrides.iter().flatten().map(|(path, _)| path) {
        if !path.starts_with(':') {
            bail!(
                "Invalid config: scm_overrides key '{}' is not a project path.\n\n\
                 💡 Hint: Project paths start with ':' (e.g., \":lib:core\").",
                path
            );
        }
    }

    if let Some(extensions) = config.placeholder_extensions.as_ref() {
        if extensions.iter().any(|e| e.trim().is_empty()) {
            bail!("Invalid config: placeholder_extensions must not contain empty entries.");
        }
    }

    if config.checksum_concurrency == Some(0) {
        bail!("Invalid config: checksum_concurrency must be at least 1.");
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_and_load(content: &str) -> Result<ConfigFile> {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        load_config_from_path(&config_path)
    }

    #[test]
    fn test_load_valid_config() {
        let config = write_and_load(
            r#"
format: markdown
document:
  name: firmware
  namespace: https://sbom.example.com/firmware
  creator: "Organization: Polar Electro"
  supplier: "Organization: Polar Electro"
  uber_package:
    name: firmware-bundle
    version: "2024.1"
    supplier: "Organization: Polar Electro"
exclude_projects:
  - ":samples:*"
  - test-fixtures
scm_overrides:
  ":vendored":
    uri: https://github.com/acme/vendored
    revision: v1.2.0
repository_mappings:
  - from: https://repo1.maven.org/maven2
    to: https://repo.maven.apache.org/maven2
placeholder_extensions: [".rip", ".marker"]
missing_module_version: skip
checksum_concurrency: 4
"#,
        )
        .unwrap();

        assert_eq!(config.format, Some(OutputFormat::Markdown));
        let document = config.document_defaults();
        assert_eq!(document.name.as_deref(), Some("firmware"));
        assert_eq!(
            document.uber_package.as_ref().map(|u| u.version.as_str()),
            Some("2024.1")
        );
        assert_eq!(
            config.exclude_projects.as_deref(),
            Some(&[":samples:*".to_string(), "test-fixtures".to_string()][..])
        );
        let scm = config.scm_overrides();
        assert_eq!(scm[":vendored"].revision.as_deref(), Some("v1.2.0"));
        assert_eq!(
            config.repository_mappings(),
            vec![RepositoryMapping {
                from: "https://repo1.maven.org/maven2".to_string(),
                to: "https://repo.maven.apache.org/maven2".to_string(),
            }]
        );
        assert_eq!(config.placeholder_extensions.as_ref().unwrap().len(), 2);
        assert_eq!(
            config.missing_module_version,
            Some(MissingModuleVersion::Skip)
        );
        assert_eq!(config.checksum_concurrency, Some(4));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let err = write_and_load("invalid: yaml: [[[broken").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_missing_module_version_value() {
        let err = write_and_load("missing_module_version: ignore\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_uber_package_name_rejected() {
        let err = write_and_load(
            r#"
document:
  uber_package:
    name: "  "
    version: "1.0"
    supplier: NOASSERTION
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("uber_package"));
    }

    #[test]
    fn test_scm_override_key_must_be_project_path() {
        let err = write_and_load(
            r#"
scm_overrides:
  vendored:
    uri: https://github.com/acme/vendored
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a project path"));
    }

    #[test]
    fn test_empty_repository_mapping_rejected() {
        let err = write_and_load(
            r#"
repository_mappings:
  - from: ""
    to: https://mirror.example.com
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("repository_mappings[0].from"));
    }

    #[test]
    fn test_zero_checksum_concurrency_rejected() {
        let err = write_and_load("checksum_concurrency: 0\n").unwrap_err();
        assert!(err.to_string().contains("checksum_concurrency"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let config = write_and_load(
            r#"
format: json
exclude_packages: [foo]
another_unknown: value
"#,
        )
        .unwrap();

        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("exclude_packages"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert_eq!(config.document_defaults(), DocumentDefaults::default());
        assert!(config.scm_overrides().is_empty());
        assert!(config.repository_mappings().is_empty());
        assert!(config.unknown_fields.is_empty());
    }
}
