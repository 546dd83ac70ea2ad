use std::collections::HashSet;

use serde::Deserialize;

/// One rule category: a set of canonical lowercase labels matched exactly
/// against the normalized label set, plus substring triggers matched against
/// every normalized label.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleCategory {
    pub exact: HashSet<String>,
    pub triggers: Vec<String>,
}

impl RuleCategory {
    fn new(exact: &[&str], triggers: &[&str]) -> Self {
        Self {
            exact: exact.iter().map(|s| s.to_lowercase()).collect(),
            triggers: triggers.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True if any normalized label is an exact member of this category.
    pub fn matches_exact(&self, normalized: &HashSet<String>) -> bool {
        normalized.iter().any(|label| self.exact.contains(label))
    }

    /// True if any normalized label contains one of this category's
    /// substring triggers (catches variants like "waiting-for-response").
    pub fn matches_trigger(&self, normalized: &HashSet<String>) -> bool {
        normalized
            .iter()
            .any(|label| self.triggers.iter().any(|t| label.contains(t.as_str())))
    }
}

/// The label vocabulary the classifier consults. Deserializable so the
/// vocabulary can evolve as configuration while the precedence chain in the
/// classifier stays fixed.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleTables {
    pub good_first_issue: RuleCategory,
    pub accepting_prs: RuleCategory,
    pub not_open: RuleCategory,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            good_first_issue: RuleCategory::new(
                &[
                    "good first issue",
                    "good-first-issue",
                    "first-timers-only",
                    "beginner-friendly",
                    "starter issue",
                    // sic: two entries fused in the legacy vocabulary; kept
                    // verbatim so existing snapshots classify identically
                    "documentationeasy bug fix",
                    "low-hanging-fruit",
                    "easy",
                    "beginner",
                    "first timer",
                    "first-time-contributor",
                    "starter",
                    "up-for-grabs",
                    "beginners-only",
                    "beginner issue",
                    "newbie",
                    "E-easy",
                    "difficulty: easy",
                    "starter bug",
                    "good for beginner",
                    "good 4 newbie",
                ],
                &["easy", "beginner"],
            ),
            accepting_prs: RuleCategory::new(
                &[
                    "accepting prs",
                    "pr welcome",
                    "pr-welcome",
                    "pr wanted",
                    "pr-wanted",
                    "hacktoberfest",
                    "open for pr",
                    "pull request welcome",
                    "pull requests welcome",
                    "PRs accepted",
                    "pr needed",
                    "pr's welcome",
                    "pull-request-welcome",
                    "pull-requests-accepted",
                    "pull-request-accepted",
                    "contribution welcome",
                    "contributions welcome",
                    "open for pull requests",
                    "pr open",
                    "prs open",
                    "pulls welcome",
                    "good second issue",
                ],
                &["help", "accepting", "contrib"],
            ),
            not_open: RuleCategory::new(
                &[
                    "wontfix",
                    "invalid",
                    "duplicate",
                    "on hold",
                    "waiting-for",
                    "stale",
                    "blocked",
                    "under investigation",
                    "cannot reproduce",
                    "needs info",
                    "needs investigation",
                    "needs triage",
                    "needs-repro",
                    "unreproducible",
                    "discussion",
                    "question",
                    "support",
                    "on-hold",
                    "needs-more-info",
                    "declined",
                    "not-a-bug",
                    "not reproducible",
                    "can't reproduce",
                    "wont-fix",
                    "invalid-issue",
                    "to-be-closed",
                    "incomplete",
                    "in-progress",
                    "needs-discussion",
                    "awaiting-feedback",
                    "more-information-needed",
                ],
                &["waiting", "blocked", "linear", "discuss"],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::normalize_labels;

    #[test]
    fn exact_sets_are_lowercased_at_construction() {
        let tables = RuleTables::default();
        assert!(tables.good_first_issue.exact.contains("e-easy"));
        assert!(tables.accepting_prs.exact.contains("prs accepted"));
    }

    #[test]
    fn exact_match_goes_through_normalization() {
        let tables = RuleTables::default();
        let labels = normalize_labels(&["Up For Grabs".to_string()]);
        assert!(tables.good_first_issue.matches_exact(&labels));
    }

    #[test]
    fn trigger_matches_inside_longer_label() {
        let tables = RuleTables::default();
        let labels = normalize_labels(&["waiting-for-response".to_string()]);
        assert!(tables.not_open.matches_trigger(&labels));
        assert!(!tables.not_open.matches_exact(&labels));
    }

    #[test]
    fn tables_load_from_json() {
        let json = r#"{
            "good_first_issue": { "exact": ["starter"], "triggers": ["easy"] },
            "accepting_prs": { "exact": [], "triggers": ["help"] },
            "not_open": { "exact": ["wontfix"], "triggers": ["blocked"] }
        }"#;
        let tables: RuleTables = serde_json::from_str(json).unwrap();
        assert!(tables.not_open.exact.contains("wontfix"));
        assert_eq!(tables.good_first_issue.triggers, vec!["easy"]);
    }
}
