/// SBOM generation core: domain model, policies and the graph-flattening services
pub mod domain;
pub mod policies;
pub mod services;
