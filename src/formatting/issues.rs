use std::collections::BTreeMap;

use colored::*;

use crate::models::IssueRecord;

use super::utils::{clean_body, format_relative_time, truncate};

/// Presentation sort orders, matching what the browsing surface offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Created,
    Updated,
    Reactions,
    Repository,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created" => Some(Self::Created),
            "updated" => Some(Self::Updated),
            "reactions" => Some(Self::Reactions),
            "repo" => Some(Self::Repository),
            _ => None,
        }
    }
}

/// Sort canonical records for display. Timestamps sort lexicographically,
/// which is chronological for the fixed-width ISO-8601 format the records
/// carry. Newest first for the time keys, most-reacted first for reactions,
/// alphabetical for repository.
pub fn sort_records(records: &mut [IssueRecord], key: SortKey) {
    match key {
        SortKey::Created => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Updated => records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortKey::Reactions => records.sort_by(|a, b| b.total_reactions.cmp(&a.total_reactions)),
        SortKey::Repository => records.sort_by(|a, b| a.repository.cmp(&b.repository)),
    }
}

pub fn print_issues(records: &[IssueRecord], format: &str) {
    if records.is_empty() {
        println!("{}", "No issues found.".dimmed());
        return;
    }

    match format {
        "json" => match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize issues: {}", e),
        },
        "table" => {
            println!("{}", "─".repeat(120).dimmed());
            println!(
                "{:<28} {:<48} {:>8} {:>9} {:<12}",
                "Repository".bold(),
                "Title".bold(),
                "Comments".bold(),
                "Reactions".bold(),
                "Updated".bold()
            );
            println!("{}", "─".repeat(120).dimmed());

            for record in records {
                println!(
                    "{:<28} {:<48} {:>8} {:>9} {:<12}",
                    truncate(&record.repository, 28).cyan(),
                    truncate(&record.title, 48),
                    record.comments,
                    record.total_reactions,
                    format_relative_time(&record.updated_at).dimmed()
                );
            }
            println!("{}", "─".repeat(120).dimmed());
        }
        _ => {
            // Group by repository for the simple view
            let mut grouped: BTreeMap<&str, Vec<&IssueRecord>> = BTreeMap::new();
            for record in records {
                grouped.entry(&record.repository).or_default().push(record);
            }

            for (repository, group) in grouped {
                println!("\n{} ({})", repository.bold(), group.len());
                println!("{}", "─".repeat(50).dimmed());

                for record in group {
                    let labels = if record.labels.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", record.labels.join(", ").cyan())
                    };

                    println!("  {}{}", truncate(&record.title, 70), labels);
                    println!("    {}", record.url.blue().underline());

                    let preview = clean_body(&record.body);
                    if !preview.is_empty() {
                        println!("    {}", truncate(&preview, 90).dimmed());
                    }
                    println!(
                        "    {} comments, {} reactions, updated {}",
                        record.comments,
                        record.total_reactions,
                        format_relative_time(&record.updated_at)
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(repo: &str, created: &str, updated: &str, reactions: u64) -> IssueRecord {
        IssueRecord {
            repository: repo.to_string(),
            url: format!("https://github.com/{}/issues/1", repo),
            title: "Example".to_string(),
            body: String::new(),
            created_at: created.to_string(),
            updated_at: updated.to_string(),
            labels: vec![],
            comments: 0,
            total_reactions: reactions,
        }
    }

    #[test]
    fn sorts_newest_updated_first() {
        let mut records = vec![
            record("a/a", "2024-01-01T00:00:00Z", "2024-01-05T00:00:00Z", 0),
            record("b/b", "2024-01-01T00:00:00Z", "2024-03-01T00:00:00Z", 0),
        ];
        sort_records(&mut records, SortKey::Updated);
        assert_eq!(records[0].repository, "b/b");
    }

    #[test]
    fn sorts_most_reactions_first() {
        let mut records = vec![
            record("a/a", "2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z", 2),
            record("b/b", "2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z", 9),
        ];
        sort_records(&mut records, SortKey::Reactions);
        assert_eq!(records[0].repository, "b/b");
    }

    #[test]
    fn sorts_repositories_alphabetically() {
        let mut records = vec![
            record("zeta/z", "2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z", 0),
            record("alpha/a", "2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z", 0),
        ];
        sort_records(&mut records, SortKey::Repository);
        assert_eq!(records[0].repository, "alpha/a");
    }

    #[test]
    fn sort_key_parses_cli_values() {
        assert_eq!(SortKey::parse("created"), Some(SortKey::Created));
        assert_eq!(SortKey::parse("repo"), Some(SortKey::Repository));
        assert_eq!(SortKey::parse("bogus"), None);
    }
}
