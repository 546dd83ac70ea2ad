use std::path::PathBuf;

use clap::ArgMatches;

use crate::config::{load_config, load_rule_tables};
use crate::error::{ErrorContext, TriageError};
use crate::logging::{log_debug, log_error};
use crate::storage::{read_snapshot, write_snapshot};
use crate::triage::{Classifier, TriageRequest};

pub fn handle_filter(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .ok_or_else(|| TriageError::InvalidInput("Input file is required".to_string()))?;
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| TriageError::InvalidInput("Output file is required".to_string()))?;
    let request = TriageRequest {
        good_first_issue: matches.get_flag("good-first-issue"),
        accepting_prs: matches.get_flag("accepting-prs"),
    };

    let (records, row_errors) =
        read_snapshot(&input).with_context(|| format!("Reading snapshot {}", input.display()))?;
    for e in &row_errors {
        log_error(&format!("{}: unreadable row: {}", input.display(), e));
    }

    let classifier = Classifier::new(load_rule_tables(&load_config())?);
    let total = records.len();
    let accepted: Vec<_> = records
        .into_iter()
        .filter(|record| {
            let keep = classifier.classify(record, request);
            if !keep {
                log_debug(&format!(
                    "rejected {} ({})",
                    record.url,
                    classifier.explain(record, request)
                ));
            }
            keep
        })
        .collect();

    write_snapshot(&output, &accepted)
        .with_context(|| format!("Writing filtered snapshot to {}", output.display()))?;

    println!(
        "Kept {} of {} issues in {}",
        accepted.len(),
        total,
        output.display()
    );

    Ok(())
}
