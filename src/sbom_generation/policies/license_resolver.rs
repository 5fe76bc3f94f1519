use crate::sbom_generation::domain::{ExtractedLicense, PomLicense, NO_ASSERTION};

/// (SPDX id, lower-cased names, lower-cased URL fragments)
const KNOWN_LICENSES: &[(&str, &[&str], &[&str])] = &[
    (
        "Apache-2.0",
        &[
            "apache-2.0",
            "apache 2.0",
            "apache 2",
            "apache license 2.0",
            "apache license, version 2.0",
            "the apache license, version 2.0",
            "the apache software license, version 2.0",
        ],
        &["apache.org/licenses/license-2.0"],
    ),
    (
        "MIT",
        &["mit", "mit license", "the mit license"],
        &["opensource.org/licenses/mit"],
    ),
    (
        "BSD-3-Clause",
        &[
            "bsd-3-clause",
            "bsd 3-clause",
            "new bsd license",
            "the bsd 3-clause license",
            "bsd license 3",
        ],
        &["opensource.org/licenses/bsd-3-clause"],
    ),
    (
        "BSD-2-Clause",
        &["bsd-2-clause", "bsd 2-clause", "simplified bsd license"],
        &["opensource.org/licenses/bsd-2-clause"],
    ),
    (
        "EPL-1.0",
        &["epl-1.0", "eclipse public license 1.0", "eclipse public license - v 1.0"],
        &["eclipse.org/legal/epl-v10"],
    ),
    (
        "EPL-2.0",
        &["epl-2.0", "eclipse public license 2.0", "eclipse public license - v 2.0"],
        &["eclipse.org/legal/epl-2.0", "eclipse.org/legal/epl-v20"],
    ),
    (
        "LGPL-2.1-only",
        &["lgpl-2.1", "gnu lesser general public license, version 2.1"],
        &["gnu.org/licenses/old-licenses/lgpl-2.1"],
    ),
    (
        "CDDL-1.0",
        &["cddl-1.0", "common development and distribution license 1.0"],
        &["opensource.org/licenses/cddl-1.0"],
    ),
];

/// An SPDX license expression plus the custom references it uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLicense {
    pub expression: String,
    /// One declaration per `LicenseRef-` in `expression`
    pub extracted: Vec<ExtractedLicense>,
}

/// Turns declared POM licenses into an SPDX license expression.
///
/// Well-known licenses map to their SPDX identifier; anything else becomes a
/// `LicenseRef-` that the caller must declare on the document. Multiple
/// licenses are conjunctive, matching Maven semantics.
pub struct LicenseResolver;

impl LicenseResolver {
    pub fn resolve(licenses: &[PomLicense]) -> ResolvedLicense {
        let mut ids: Vec<String> = Vec::new();
        let mut extracted: Vec<ExtractedLicense> = Vec::new();
        for license in licenses {
            let Some(resolved) = Self::resolve_one(license) else {
                continue;
            };
            let id = match resolved {
                License::Listed(id) => id.to_string(),
                License::Custom(custom) => {
                    let id = custom.license_id.clone();
                    if !extracted.iter().any(|e| e.license_id == id) {
                        extracted.push(custom);
                    }
                    id
                }
            };
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        let expression = match ids.len() {
            0 => NO_ASSERTION.to_string(),
            1 => ids.remove(0),
            _ => ids.join(" AND "),
        };
        ResolvedLicense {
            expression,
            extracted,
        }
    }

    fn resolve_one(license: &PomLicense) -> Option<License> {
        let name = license
            .name
            .as_deref()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty());
        let url = license
            .url
            .as_deref()
            .map(normalize_url)
            .filter(|u| !u.is_empty());

        if name.is_none() && url.is_none() {
            return None;
        }

        let known = KNOWN_LICENSES.iter().find(|(_, names, urls)| {
            name.as_deref().is_some_and(|n| names.contains(&n))
                || url
                    .as_deref()
                    .is_some_and(|u| urls.iter().any(|fragment| u.contains(fragment)))
        });
        if let Some((id, _, _)) = known {
            return Some(License::Listed(*id));
        }

        let label = license
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or(license.url.as_deref().map(str::trim))?;
        let sanitized = sanitize(label);
        if sanitized.is_empty() {
            return None;
        }

        Some(License::Custom(ExtractedLicense {
            license_id: format!("LicenseRef-{}", sanitized),
            name: label.to_string(),
            extracted_text: label.to_string(),
            see_also: license
                .url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(String::from)
                .into_iter()
                .collect(),
        }))
    }
}

enum License {
    Listed(&'static str),
    Custom(ExtractedLicense),
}

fn normalize_url(url: &str) -> String {
    let lower = url.trim().to_lowercase();
    let without_scheme = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme)
        .to_string()
}

fn sanitize(label: &str) -> String {
    let sanitized: String = label
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '-' })
        .collect();
    sanitized.trim_matches('-').to_string()
}
