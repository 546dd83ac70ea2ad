use std::path::PathBuf;

use clap::ArgMatches;

use crate::error::{ErrorContext, TriageError};
use crate::logging::log_error;
use crate::storage::{read_snapshot, write_snapshot};
use crate::triage::Deduplicator;

pub fn handle_merge(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let inputs: Vec<PathBuf> = matches
        .get_many::<String>("csvfiles")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default();
    if inputs.is_empty() {
        return Err(TriageError::InvalidInput("No input files given".to_string()).into());
    }
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| TriageError::InvalidInput("Output file is required".to_string()))?;

    let mut dedup = Deduplicator::new();
    let mut rejected = 0usize;
    for input in &inputs {
        let (batch, row_errors) = read_snapshot(input)
            .with_context(|| format!("Reading snapshot {}", input.display()))?;
        for e in &row_errors {
            log_error(&format!("{}: unreadable row: {}", input.display(), e));
        }
        rejected += row_errors.len();

        for e in dedup.merge_batch(batch) {
            log_error(&format!("{}: rejected record: {}", input.display(), e));
            rejected += 1;
        }
    }

    let canonical: Vec<_> = dedup.into_map().into_values().collect();
    write_snapshot(&output, &canonical)
        .with_context(|| format!("Writing merged snapshot to {}", output.display()))?;

    println!(
        "Successfully merged {} files into {} ({} canonical records, {} rejected).",
        inputs.len(),
        output.display(),
        canonical.len(),
        rejected
    );

    Ok(())
}
