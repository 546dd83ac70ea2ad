use std::path::PathBuf;

use clap::ArgMatches;

use crate::config::{load_config, load_rule_tables};
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::error::{ErrorContext, TriageError};
use crate::formatting::{print_issues, sort_records, SortKey};
use crate::logging::log_error;
use crate::storage::read_snapshot;
use crate::triage::{Classifier, Deduplicator, TriageRequest};

pub fn handle_list(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .ok_or_else(|| TriageError::InvalidInput("Input file is required".to_string()))?;
    let sort_key = match matches.get_one::<String>("sort") {
        Some(value) => SortKey::parse(value).ok_or_else(|| {
            TriageError::InvalidInput(format!(
                "Unknown sort key '{}'. Use created, updated, reactions or repo.",
                value
            ))
        })?,
        None => SortKey::Created,
    };
    let limit = matches
        .get_one::<String>("limit")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_LIST_LIMIT);
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("simple");
    let request = TriageRequest {
        good_first_issue: matches.get_flag("good-first-issue"),
        accepting_prs: matches.get_flag("accepting-prs"),
    };

    let (records, row_errors) =
        read_snapshot(&input).with_context(|| format!("Reading snapshot {}", input.display()))?;
    for e in &row_errors {
        log_error(&format!("{}: unreadable row: {}", input.display(), e));
    }

    // Collapse duplicates before presenting; snapshots may span overlapping
    // pull windows
    let mut dedup = Deduplicator::new();
    for e in dedup.merge_batch(records) {
        log_error(&format!("{}: rejected record: {}", input.display(), e));
    }

    let classifier = Classifier::new(load_rule_tables(&load_config())?);
    let mut visible: Vec<_> = dedup
        .into_map()
        .into_values()
        .filter(|record| classifier.classify(record, request))
        .collect();

    sort_records(&mut visible, sort_key);
    visible.truncate(limit);
    print_issues(&visible, format);

    Ok(())
}
