use clap::Parser;
use gradle_spdx_sbom::application::dto::OutputFormat;
use std::path::PathBuf;

/// Generate SPDX SBOMs from a Gradle dependency resolution report
#[derive(Parser, Debug)]
#[command(name = "gradle-spdx-sbom")]
#[command(version)]
#[command(about = "Generate SPDX SBOMs from a Gradle dependency resolution report", long_about = None)]
pub struct Args {
    /// Path to the resolution report (JSON) exported by the build
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output format: json (SPDX 2.3) or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to gradle-spdx-sbom.config.yml next to the report)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exclude build projects matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e ":samples:*" -e "test-fixtures"
    #[arg(short, long = "exclude-project", value_name = "PATTERN")]
    pub exclude_projects: Vec<String>,

    /// SPDX document name
    #[arg(long)]
    pub document_name: Option<String>,

    /// SPDX document namespace URI
    #[arg(long)]
    pub namespace: Option<String>,

    /// Supplier of the build's own project packages (e.g. "Organization: ACME")
    #[arg(long)]
    pub supplier: Option<String>,

    /// Also print informational diagnostics, such as elided components
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
