use std::collections::HashSet;

/// Expand raw issue labels into the canonical set the classifier matches
/// against: every label lowercased, plus a hyphen-for-space and a
/// space-for-hyphen variant of each. Matching downstream is therefore
/// insensitive to case and to how a multi-word label is separated.
pub fn normalize_labels(labels: &[String]) -> HashSet<String> {
    let mut normalized = HashSet::new();
    for label in labels {
        let lower = label.to_lowercase();
        normalized.insert(lower.replace(' ', "-"));
        normalized.insert(lower.replace('-', " "));
        normalized.insert(lower);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lowercases_and_expands_separators() {
        let set = normalize_labels(&strings(&["Good First Issue"]));
        assert!(set.contains("good first issue"));
        assert!(set.contains("good-first-issue"));
    }

    #[test]
    fn hyphenated_input_gains_spaced_variant() {
        let set = normalize_labels(&strings(&["needs-triage"]));
        assert!(set.contains("needs-triage"));
        assert!(set.contains("needs triage"));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(normalize_labels(&[]).is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let set = normalize_labels(&strings(&["bug", "Bug", "BUG"]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_labels(&strings(&["Help Wanted", "E-Easy"]));
        let mut as_input: Vec<String> = once.iter().cloned().collect();
        as_input.sort();
        let twice = normalize_labels(&as_input);
        assert_eq!(once, twice);
    }
}
