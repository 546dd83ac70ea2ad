use serde::{Deserialize, Serialize};

use crate::error::{TriageError, TriageResult};

/// One issue as stored in a CSV snapshot. Field renames match the snapshot
/// column headers so records round-trip between invocations.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    #[serde(rename = "Repository")]
    pub repository: String,
    #[serde(rename = "Issue URL")]
    pub url: String,
    #[serde(rename = "Issue Title")]
    pub title: String,
    #[serde(rename = "Issue Body", default)]
    pub body: String,
    #[serde(rename = "Created At")]
    pub created_at: String,
    #[serde(rename = "Updated At")]
    pub updated_at: String,
    #[serde(rename = "Labels", with = "comma_separated")]
    pub labels: Vec<String>,
    #[serde(rename = "Comments")]
    pub comments: u64,
    #[serde(rename = "Total Reactions")]
    pub total_reactions: u64,
}

impl IssueRecord {
    /// Check the fields the merge engine depends on. Records failing this
    /// are rejected from the canonical set, not silently patched up.
    pub fn validate(&self) -> TriageResult<()> {
        if self.url.trim().is_empty() {
            return Err(TriageError::MissingField {
                url: format!("{}: {}", self.repository, self.title),
                field: "Issue URL",
            });
        }
        if self.updated_at.trim().is_empty() {
            return Err(TriageError::MissingField {
                url: self.url.clone(),
                field: "Updated At",
            });
        }
        Ok(())
    }
}

/// Labels are stored in the CSV as a single ", "-joined field.
mod comma_separated {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(labels: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&labels.join(", "))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(raw.split(", ").map(|s| s.to_string()).collect())
    }
}
