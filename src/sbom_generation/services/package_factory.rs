use super::artifact_index::ArtifactIndex;
use super::checksum_calculator::ChecksumCalculator;
use super::locations;
use crate::sbom_generation::domain::{
    ComponentId, Diagnostics, ExternalRef, ModuleCoordinates, OrganizationInfo, PackageRecord,
    PomInfo, ProjectInfo, ResolvedComponent, SbomDocument, ScmInfo, SpdxId, UberPackageInfo,
    NO_ASSERTION,
};
use crate::sbom_generation::policies::{
    LicenseResolver, OrganizationHeuristics, PackagePolicy, SupplierBuilder,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Project version reported by the build tool when none was set
const UNSPECIFIED_VERSION: &str = "unspecified";

/// Supplier of project packages when neither configuration nor the report sets one
pub const DEFAULT_PROJECT_SUPPLIER: &str = "Organization: Polar Electro";

/// What to do with a materialized module whose resolver left out the module version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingModuleVersion {
    /// Abort generation
    #[default]
    Fail,
    /// Elide the component like an unmaterialized module
    Skip,
}

/// Read-only inputs shared by every package creation of one run
pub struct SynthesisContext<'a> {
    pub projects: &'a HashMap<String, ProjectInfo>,
    pub poms: &'a HashMap<String, PomInfo>,
    pub repositories: &'a HashMap<String, String>,
    pub scm: &'a ScmInfo,
    /// Supplier for project packages, already merged from all configuration sources
    pub project_supplier: &'a str,
    pub artifacts: &'a ArtifactIndex,
    pub checksums: &'a ChecksumCalculator,
    pub policy: &'a dyn PackagePolicy,
    pub missing_module_version: MissingModuleVersion,
}

/// PackageFactory - decides whether a component becomes a package and builds it.
///
/// `create` returns `Ok(None)` when the component is elided: a project excluded
/// by policy, or a module without a local artifact.
pub struct PackageFactory<'a> {
    context: SynthesisContext<'a>,
}

impl<'a> PackageFactory<'a> {
    pub fn new(context: SynthesisContext<'a>) -> Self {
        Self { context }
    }

    pub fn create(
        &self,
        component: &ResolvedComponent,
        document: &mut SbomDocument,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<SpdxId>> {
        match &component.id {
            ComponentId::Project { path } => {
                let project =
                    self.context
                        .projects
                        .get(path)
                        .ok_or_else(|| SbomError::UnknownProject {
                            path: path.clone(),
                        })?;
                if !self.context.policy.should_create_package_for_project(project) {
                    return Ok(None);
                }
                let package = self.project_package(project, document, diagnostics)?;
                Ok(Some(document.add_package(package)))
            }
            ComponentId::Module(_) => {
                let package = self.module_package(component, document, diagnostics)?;
                Ok(package.map(|package| document.add_package(package)))
            }
            ComponentId::Root => Err(SbomError::UnknownComponentKind {
                component: component.id.to_string(),
            }
            .into()),
        }
    }

    /// The synthetic package that wraps the whole graph
    pub fn create_uber(
        &self,
        info: &UberPackageInfo,
        document: &mut SbomDocument,
    ) -> Result<SpdxId> {
        let mut package = PackageRecord::new(document.next_spdx_id()?, &info.name, &info.version);
        package.supplier = info.supplier.clone();
        Ok(document.add_package(package))
    }

    fn project_package(
        &self,
        project: &ProjectInfo,
        document: &mut SbomDocument,
        diagnostics: &mut Diagnostics,
    ) -> Result<PackageRecord> {
        let version = if project.version.is_empty() || project.version == UNSPECIFIED_VERSION {
            diagnostics.warn(format!(
                "spdx sboms require a version but project: {} has no specified version",
                project.name
            ));
            NO_ASSERTION.to_string()
        } else {
            project.version.clone()
        };

        let supplier = self.context.project_supplier;
        if supplier == NO_ASSERTION {
            diagnostics.warn(format!("supplier not set for project {}", project.name));
        }

        let scm = self.context.policy.map_scm_for_project(self.context.scm, project);

        let mut package = PackageRecord::new(document.next_spdx_id()?, &project.name, version);
        package.supplier = supplier.to_string();
        package.description = Some(project.description.clone().unwrap_or_default());
        package.source_info = Some(scm.download_location(project));
        Ok(package)
    }

    fn module_package(
        &self,
        component: &ResolvedComponent,
        document: &mut SbomDocument,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<PackageRecord>> {
        let Some(file) = self.context.artifacts.get(&component.id) else {
            return Ok(None);
        };

        let Some(module) = component.module_version.as_ref() else {
            diagnostics.error(format!("module version is missing for {}", component.id));
            return match self.context.missing_module_version {
                MissingModuleVersion::Fail => Err(SbomError::MissingModuleVersion {
                    component: component.id.to_string(),
                }
                .into()),
                MissingModuleVersion::Skip => Ok(None),
            };
        };

        let display_name = component.id.display_name();
        let pom = match self.context.poms.get(&display_name) {
            Some(pom) => pom.clone(),
            None => {
                diagnostics.error(format!("POM metadata is missing for {}", display_name));
                fallback_pom(module)
            }
        };

        let repository_id =
            component
                .repository_id
                .as_deref()
                .ok_or_else(|| SbomError::UnresolvedSourceRepository {
                    component: component.id.to_string(),
                })?;
        let repository_uri = self.context.policy.map_repository_uri(
            self.context.repositories.get(repository_id).map(String::as_str),
            module,
        );

        let mut package = PackageRecord::new(
            document.next_spdx_id()?,
            format!("{}:{}", module.group, module.name),
            &module.version,
        );
        let license = LicenseResolver::resolve(&pom.licenses);
        for extracted in license.extracted {
            document.declare_license(extracted);
        }
        package.license_declared = license.expression;
        package.supplier = SupplierBuilder::build(&pom);
        package.homepage = pom.homepage.clone().filter(|h| !h.trim().is_empty());

        if let Some(uri) = repository_uri.as_deref() {
            package.download_location =
                locations::download_location(uri, module, &file_name(file));
            package.external_ref = Some(ExternalRef::purl(locations::purl(uri, module)));
        }

        package.checksums = self.context.checksums.checksums(file)?;
        Ok(Some(package))
    }
}

/// Stand-in metadata for modules published without a POM
fn fallback_pom(module: &ModuleCoordinates) -> PomInfo {
    PomInfo {
        organization: OrganizationHeuristics::infer(&module.group).map(|name| OrganizationInfo {
            name: name.to_string(),
            url: None,
        }),
        ..PomInfo::default()
    }
}

fn file_name(file: &Path) -> String {
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
