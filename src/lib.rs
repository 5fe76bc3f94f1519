//! gradle-spdx-sbom - SPDX SBOM generation from a Gradle dependency resolution report
//!
//! This library flattens a resolved build dependency graph into SPDX packages and
//! depends-on relationships, following hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Graph model, package policies and the walk
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gradle_spdx_sbom::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     StderrDiagnosticLogger::new(false),
//! );
//!
//! let request = SbomRequest::builder()
//!     .input_path("build/reports/resolution.json")
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! let output = SpdxJsonFormatter::new().format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrDiagnosticLogger, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{MarkdownFormatter, SpdxJsonFormatter};
    pub use crate::application::dto::{GenerationStats, OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        DiagnosticLogger, OutputPresenter, ProgressReporter, ResolutionReader, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        BuildResolution, ComponentId, PackageRecord, ResolvedComponent, ResolvedGraph,
        SbomDocument, SbomMetadata,
    };
    pub use crate::sbom_generation::policies::{
        ConfiguredPackagePolicy, DefaultPackagePolicy, PackagePolicy,
    };
    pub use crate::sbom_generation::services::{MissingModuleVersion, SbomGenerator};
    pub use crate::shared::Result;
}
