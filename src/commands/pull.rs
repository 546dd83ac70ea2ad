use std::path::PathBuf;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::constants::{DEFAULT_LOOKBACK_DAYS, DEFAULT_MAX_ISSUES_PER_REPO};
use crate::error::{ErrorContext, TriageError};
use crate::logging::{log_error, log_info};
use crate::storage::write_snapshot;

pub async fn handle_pull(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .verified_client()
        .context("Failed to create GitHub client")?;

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| TriageError::InvalidInput("Output file is required".to_string()))?;
    let max_issues = matches
        .get_one::<String>("max-issues")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_ISSUES_PER_REPO);
    let days = matches
        .get_one::<String>("days")
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(DEFAULT_LOOKBACK_DAYS);

    let repos = client
        .get_starred_repos()
        .await
        .map_err(|e| TriageError::ApiError(format!("Failed to list starred repositories: {}", e)))?;
    println!("Pulling issues from {} starred repositories...", repos.len());

    let mut all_issues = Vec::new();
    let mut skipped = 0usize;
    for repo in &repos {
        log_info(&format!("Processing {}", repo));
        match client.get_issues(repo, max_issues, days).await {
            Ok(issues) => {
                log_info(&format!("{}: {} issues", repo, issues.len()));
                all_issues.extend(issues);
            }
            Err(e) => {
                // One bad repository never aborts the pull
                log_error(&format!("Failed to process {}: {}", repo, e));
                eprintln!("Skipping {}: {}", repo, e);
                skipped += 1;
                continue;
            }
        }

        // Rewrite after every repo so partial progress survives an abort
        write_snapshot(&output, &all_issues)
            .with_context(|| format!("Writing snapshot to {}", output.display()))?;
    }

    println!(
        "Wrote {} issues from {} repositories to {} ({} skipped)",
        all_issues.len(),
        repos.len() - skipped,
        output.display(),
        skipped
    );

    Ok(())
}
