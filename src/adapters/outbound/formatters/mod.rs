/// Formatter adapters for different SBOM output formats
mod markdown_formatter;
mod spdx_json_formatter;

pub use markdown_formatter::MarkdownFormatter;
pub use spdx_json_formatter::SpdxJsonFormatter;
