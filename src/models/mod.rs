pub mod github;
pub mod issue;

pub use github::{ApiIssue, ApiLabel, StarredRepo};
pub use issue::IssueRecord;
