// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod storage;
pub mod triage;

// Re-export commonly used items
pub use client::GitHubClient;
pub use config::{get_token, load_config, load_rule_tables, save_config, Config};
pub use error::{TriageError, TriageResult};
pub use models::*;
pub use triage::{deduplicate, normalize_labels, Classifier, Deduplicator, RuleTables, TriageRequest};
