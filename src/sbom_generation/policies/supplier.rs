use crate::sbom_generation::domain::{PomInfo, NO_ASSERTION};

/// Derives an SPDX supplier string from POM metadata.
///
/// Priority order:
/// 1. organization name -> `Organization: <name>`
/// 2. first developer with a usable name -> `Person: <name> (<email>)`
/// 3. NOASSERTION
pub struct SupplierBuilder;

impl SupplierBuilder {
    pub fn build(pom: &PomInfo) -> String {
        if let Some(org) = pom
            .organization
            .as_ref()
            .filter(|o| is_usable(&o.name))
        {
            return format!("Organization: {}", org.name);
        }

        pom.developers
            .iter()
            .find_map(|dev| {
                let name = dev.name.as_deref().filter(|n| is_usable(n))?;
                Some(match dev.email.as_deref().filter(|e| is_usable(e)) {
                    Some(email) => format!("Person: {} ({})", name, email),
                    None => format!("Person: {}", name),
                })
            })
            .unwrap_or_else(|| NO_ASSERTION.to_string())
    }
}

fn is_usable(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != NO_ASSERTION
}
