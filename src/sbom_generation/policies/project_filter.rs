use crate::sbom_generation::domain::ProjectInfo;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of project exclusion patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ProjectFilter - decides which build projects are excluded from the SBOM
///
/// Patterns support '*' (zero or more characters) and are matched against
/// both the project path (`:lib:core`) and the project name (`core`).
#[derive(Debug, Default)]
pub struct ProjectFilter {
    patterns: Vec<ExcludePattern>,
}

impl ProjectFilter {
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many project exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// True if any pattern matches the project's path or name
    pub fn excludes(&self, project: &ProjectInfo) -> bool {
        // Evaluate every pattern so unmatched-pattern tracking stays accurate
        self.patterns
            .iter()
            .map(|p| p.matches(&project.path) || p.matches(&project.name))
            .fold(false, |acc, hit| acc || hit)
    }

    /// Patterns that have not matched any project so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    /// Literal segments between wildcards
    segments: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let segments = pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
            segments,
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, candidate: &str) -> bool {
        let is_match = self.matches_segments(candidate);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    fn matches_segments(&self, candidate: &str) -> bool {
        if self.segments.len() == 1 && self.anchored_start && self.anchored_end {
            return candidate == self.segments[0];
        }

        let mut rest = candidate;
        let last = self.segments.len() - 1;
        for (i, segment) in self.segments.iter().enumerate() {
            if i == 0 && self.anchored_start {
                match rest.strip_prefix(segment.as_str()) {
                    Some(r) => rest = r,
                    None => return false,
                }
            } else if i == last && self.anchored_end {
                return rest.ends_with(segment.as_str());
            } else {
                match rest.find(segment.as_str()) {
                    Some(pos) => rest = &rest[pos + segment.len()..],
                    None => return false,
                }
            }
        }

        !self.anchored_end || rest.is_empty()
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Project exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Project exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Project exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, colons and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Project exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '*')
}
