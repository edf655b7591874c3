//! Applicant profile — the contact fields collected before generation.

use serde::{Deserialize, Serialize};

/// Contact details for the person the résumé is about.
///
/// `links_raw` keeps the link field exactly as the user typed it; the wire
/// payload carries the normalized list from [`ApplicantProfile::links`]
/// instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub links_raw: String,
}

impl ApplicantProfile {
    /// Normalized link list derived from the raw field.
    pub fn links(&self) -> Vec<String> {
        split_links(&self.links_raw)
    }
}

/// Splits a raw link field on whitespace or commas and drops empty tokens.
pub fn split_links(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_links_on_commas_and_whitespace() {
        assert_eq!(split_links("a, b,c  d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_links_empty_input() {
        assert!(split_links("").is_empty());
    }

    #[test]
    fn test_split_links_separators_only() {
        assert!(split_links(" ,,  , ").is_empty());
    }

    #[test]
    fn test_split_links_single_url_untouched() {
        assert_eq!(
            split_links("https://github.com/someone"),
            vec!["https://github.com/someone"]
        );
    }

    #[test]
    fn test_profile_links_uses_raw_field() {
        let profile = ApplicantProfile {
            links_raw: "github.com/a linkedin.com/b".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.links(), vec!["github.com/a", "linkedin.com/b"]);
    }
}
