/// Business rules for package synthesis that are kept as data, not traversal logic
mod license_resolver;
mod organization_heuristics;
mod package_policy;
mod project_filter;
mod supplier;

pub use license_resolver::{LicenseResolver, ResolvedLicense};
pub use organization_heuristics::{OrganizationHeuristics, ORGANIZATION_RULES};
pub use package_policy::{
    ConfiguredPackagePolicy, DefaultPackagePolicy, PackagePolicy, RepositoryMapping,
};
pub use project_filter::ProjectFilter;
pub use supplier::SupplierBuilder;
