mod cli;

use cli::Args;
use gradle_spdx_sbom::adapters::outbound::console::{
    StderrDiagnosticLogger, StderrProgressReporter,
};
use gradle_spdx_sbom::adapters::outbound::filesystem::FileSystemReader;
use gradle_spdx_sbom::application::dto::SbomRequest;
use gradle_spdx_sbom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use gradle_spdx_sbom::application::use_cases::GenerateSbomUseCase;
use gradle_spdx_sbom::config::{self, ConfigFile};
use gradle_spdx_sbom::sbom_generation::domain::DocumentDefaults;
use gradle_spdx_sbom::shared::error::ExitCode;
use gradle_spdx_sbom::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let format = args.format.or(config.format).unwrap_or_default();
    let verbose = args.verbose;
    let output = args.output.clone();
    let request = build_request(args, &config)?;

    // Create adapters (Dependency Injection)
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        StderrProgressReporter::new(),
        StderrDiagnosticLogger::new(verbose),
    );

    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted_output = FormatterFactory::create(format).format(&response.document)?;

    PresenterFactory::create(PresenterType::from_output(output)).present(&formatted_output)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise look next to the report
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        return config::load_config_from_path(path);
    }

    let report_dir = args
        .input
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    match config::discover_config(report_dir)? {
        Some(found) => {
            eprintln!(
                "📄 Auto-discovered config file: {}",
                report_dir.join(config::CONFIG_FILENAME).display()
            );
            Ok(found)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// CLI flags win over the configuration file; exclusion patterns from both apply
fn build_request(args: Args, config: &ConfigFile) -> Result<SbomRequest> {
    let configured = config.document_defaults();
    let document = DocumentDefaults {
        name: args.document_name.or(configured.name),
        namespace: args.namespace.or(configured.namespace),
        creator: configured.creator,
        supplier: args.supplier.or(configured.supplier),
        uber_package: configured.uber_package,
    };

    let mut exclude_projects = args.exclude_projects;
    for pattern in config.exclude_projects.iter().flatten() {
        if !exclude_projects.contains(pattern) {
            exclude_projects.push(pattern.clone());
        }
    }

    let mut builder = SbomRequest::builder()
        .input_path(args.input)
        .document(document)
        .exclude_projects(exclude_projects)
        .scm_overrides(config.scm_overrides())
        .repository_mappings(config.repository_mappings());
    if let Some(extensions) = config.placeholder_extensions.clone() {
        builder = builder.placeholder_extensions(extensions);
    }
    if let Some(behavior) = config.missing_module_version {
        builder = builder.missing_module_version(behavior);
    }
    if let Some(concurrency) = config.checksum_concurrency {
        builder = builder.checksum_concurrency(concurrency);
    }

    builder.build()
}
