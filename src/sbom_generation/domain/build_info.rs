//! Build-side metadata consumed by package synthesis: the project registry,
//! source control, POM metadata and document-level settings.

use super::package::NO_ASSERTION;

/// A project of the build, as registered by its path (e.g. `:lib:core`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub path: String,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

impl ProjectInfo {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            version: version.into(),
            description: None,
        }
    }
}

/// Source-control location of the build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScmInfo {
    pub uri: Option<String>,
    pub revision: Option<String>,
}

impl ScmInfo {
    pub fn new(uri: Option<String>, revision: Option<String>) -> Self {
        Self { uri, revision }
    }

    /// `git+<uri>@<revision>#<subpath>`, NOASSERTION when the uri is unknown
    pub fn download_location(&self, project: &ProjectInfo) -> String {
        let Some(uri) = self.uri.as_deref().filter(|u| !u.is_empty()) else {
            return NO_ASSERTION.to_string();
        };

        let mut location = if uri.starts_with("git+") {
            uri.to_string()
        } else {
            format!("git+{}", uri)
        };
        if let Some(revision) = self.revision.as_deref().filter(|r| !r.is_empty()) {
            location.push('@');
            location.push_str(revision);
        }

        let subpath = project
            .path
            .split(':')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        if !subpath.is_empty() {
            location.push('#');
            location.push_str(&subpath);
        }

        location
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomLicense {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationInfo {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeveloperInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
}

/// POM-like metadata of a module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomInfo {
    pub licenses: Vec<PomLicense>,
    pub homepage: Option<String>,
    pub organization: Option<OrganizationInfo>,
    pub developers: Vec<DeveloperInfo>,
}

/// Descriptor of the synthetic package wrapping the whole graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UberPackageInfo {
    pub name: String,
    pub version: String,
    pub supplier: String,
}

/// Document-level settings after CLI, config and report defaults are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub name: String,
    pub namespace: String,
    pub creator: Option<String>,
    /// Global supplier override for project packages
    pub supplier: Option<String>,
    pub uber_package: Option<UberPackageInfo>,
}
