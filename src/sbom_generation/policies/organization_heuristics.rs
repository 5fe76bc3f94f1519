/// Ordered (group fragments, organization) table; the first row with a
/// fragment contained in the module group wins.
pub const ORGANIZATION_RULES: &[(&[&str], &str)] = &[
    (&["polar"], "Polar Electro"),
    (&["ej.", "com.is2t.", "microej"], "MicroEJ"),
    (&["com.google."], "Google"),
];

/// Infers a module's organization from its group when no POM metadata exists
pub struct OrganizationHeuristics;

impl OrganizationHeuristics {
    pub fn infer(group: &str) -> Option<&'static str> {
        Self::infer_with(ORGANIZATION_RULES, group)
    }

    pub fn infer_with(rules: &[(&[&str], &'static str)], group: &str) -> Option<&'static str> {
        rules
            .iter()
            .find(|(fragments, _)| fragments.iter().any(|fragment| group.contains(fragment)))
            .map(|(_, organization)| *organization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_group() {
        assert_eq!(
            OrganizationHeuristics::infer("fi.polar.firmware"),
            Some("Polar Electro")
        );
    }

    #[test]
    fn test_microej_markers() {
        assert_eq!(OrganizationHeuristics::infer("ej.api"), Some("MicroEJ"));
        assert_eq!(
            OrganizationHeuristics::infer("com.is2t.tools"),
            Some("MicroEJ")
        );
        assert_eq!(
            OrganizationHeuristics::infer("com.microej.pack"),
            Some("MicroEJ")
        );
    }

    #[test]
    fn test_google_group() {
        assert_eq!(
            OrganizationHeuristics::infer("com.google.guava"),
            Some("Google")
        );
        // "com.google" without the trailing dot is not a match
        assert_eq!(OrganizationHeuristics::infer("com.google"), None);
    }

    #[test]
    fn test_first_match_wins() {
        // Matches both the Polar and the Google rows
        assert_eq!(
            OrganizationHeuristics::infer("com.google.polar"),
            Some("Polar Electro")
        );
    }

    #[test]
    fn test_unknown_group() {
        assert_eq!(OrganizationHeuristics::infer("org.apache.commons"), None);
    }

    #[test]
    fn test_custom_table() {
        let rules: &[(&[&str], &str)] = &[(&["acme"], "Acme Corp")];
        assert_eq!(
            OrganizationHeuristics::infer_with(rules, "io.acme.widgets"),
            Some("Acme Corp")
        );
        assert_eq!(OrganizationHeuristics::infer_with(rules, "fi.polar"), None);
    }
}
