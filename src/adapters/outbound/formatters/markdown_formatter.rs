use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{PackageRecord, SbomDocument, SpdxId};
use crate::shared::Result;
use std::collections::HashMap;

/// Markdown table header for package information
const TABLE_HEADER: &str = "| Package | Version | License | Supplier |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|---------|----------|\n";

/// MarkdownFormatter adapter for a human-readable SBOM summary
///
/// Lists every package, then the depends-on edges grouped by parent
/// in emission order.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn package_label(package: &PackageRecord) -> String {
        format!("{} {}", package.name, package.version)
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, document: &SbomDocument) {
        let metadata = document.metadata();
        output.push_str("# Software Bill of Materials (SBOM)\n\n");
        output.push_str(&format!("- **Document:** {}\n", metadata.name()));
        output.push_str(&format!("- **Namespace:** {}\n", metadata.namespace()));
        output.push_str(&format!("- **Created:** {}\n", metadata.created()));
        for creator in metadata.creators() {
            output.push_str(&format!("- **Creator:** {}\n", creator));
        }
        if let Some(root) = document.describes().and_then(|id| document.package(id)) {
            output.push_str(&format!("- **Describes:** {}\n", Self::package_label(root)));
        }
        output.push('\n');
    }

    fn render_packages(&self, output: &mut String, document: &SbomDocument) {
        output.push_str("## Component Inventory\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for package in document.packages() {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&package.name),
                Self::escape_markdown_table_cell(&package.version),
                Self::escape_markdown_table_cell(&package.license_declared),
                Self::escape_markdown_table_cell(&package.supplier)
            ));
        }
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, document: &SbomDocument) {
        let names: HashMap<&SpdxId, String> = document
            .packages()
            .map(|p| (&p.spdx_id, Self::package_label(p)))
            .collect();

        output.push_str("## Dependencies\n\n");

        let mut any = false;
        for package in document.packages() {
            if package.relationships.is_empty() {
                continue;
            }
            any = true;
            output.push_str(&format!("### {}\n\n", Self::package_label(package)));
            for relationship in &package.relationships {
                let related = names
                    .get(&relationship.related)
                    .cloned()
                    .unwrap_or_else(|| relationship.related.to_string());
                output.push_str(&format!("- {}\n", related));
            }
            output.push('\n');
        }

        if !any {
            output.push_str("*No dependencies*\n\n");
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for MarkdownFormatter {
    fn format(&self, document: &SbomDocument) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, document);
        self.render_packages(&mut output, document);
        self.render_dependencies(&mut output, document);

        Ok(output)
    }
}
