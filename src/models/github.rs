use serde::Deserialize;
use serde_json::Value;

use super::IssueRecord;

#[derive(Debug, Deserialize)]
pub struct StarredRepo {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiLabel {
    pub name: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct Reactions {
    #[serde(default)]
    pub total_count: u64,
}

/// An issue as returned by the GitHub REST API. Only the fields the triage
/// pipeline cares about; `pull_request` and `assignee` exist so the fetcher
/// can skip PRs and already-claimed issues.
#[derive(Debug, Deserialize)]
pub struct ApiIssue {
    pub html_url: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub labels: Vec<ApiLabel>,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub reactions: Reactions,
    #[serde(default)]
    pub pull_request: Option<Value>,
    #[serde(default)]
    pub assignee: Option<Value>,
}

impl ApiIssue {
    pub fn into_record(self, repository: &str) -> IssueRecord {
        IssueRecord {
            repository: repository.to_string(),
            url: self.html_url,
            title: self.title,
            body: self.body.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            labels: self.labels.into_iter().map(|l| l.name).collect(),
            comments: self.comments,
            total_reactions: self.reactions.total_count,
        }
    }
}
