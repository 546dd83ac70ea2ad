use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::{TriageError, TriageResult};
use crate::models::IssueRecord;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Collapses issue batches into one canonical record per URL, keeping the
/// most recently updated version. Timestamps are fixed-width ISO-8601 UTC,
/// so lexicographic comparison equals chronological comparison; each record
/// is still parse-checked before comparing so a malformed timestamp surfaces
/// as an error naming the URL instead of a silently wrong merge.
#[derive(Debug, Default)]
pub struct Deduplicator {
    canonical: HashMap<String, IssueRecord>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one record. Replaces an existing record for the same URL only
    /// if the candidate is strictly newer; on an exact timestamp tie the
    /// earliest-processed record is kept.
    pub fn insert(&mut self, record: IssueRecord) -> TriageResult<()> {
        record.validate()?;
        if NaiveDateTime::parse_from_str(&record.updated_at, TIMESTAMP_FORMAT).is_err() {
            return Err(TriageError::InvalidTimestamp {
                url: record.url.clone(),
                value: record.updated_at.clone(),
            });
        }
        match self.canonical.entry(record.url.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if record.updated_at > slot.get().updated_at {
                    slot.insert(record);
                }
            }
        }
        Ok(())
    }

    /// Merge a whole batch, collecting per-record errors instead of aborting.
    /// Bad records are dropped from the canonical set; the rest of the batch
    /// is still processed.
    pub fn merge_batch<I>(&mut self, batch: I) -> Vec<TriageError>
    where
        I: IntoIterator<Item = IssueRecord>,
    {
        batch
            .into_iter()
            .filter_map(|record| self.insert(record).err())
            .collect()
    }

    /// Pairwise merge of another deduplicator's output, for callers that
    /// process batches independently. Applies the same strictly-newer-wins
    /// rule; records in `other` have already been validated by its inserts.
    pub fn merge_map(&mut self, other: HashMap<String, IssueRecord>) {
        for (url, record) in other {
            match self.canonical.entry(url) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(mut slot) => {
                    if record.updated_at > slot.get().updated_at {
                        slot.insert(record);
                    }
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &IssueRecord> {
        self.canonical.values()
    }

    pub fn into_map(self) -> HashMap<String, IssueRecord> {
        self.canonical
    }
}

/// Convenience entry point: deduplicate a sequence of batches in order,
/// returning the canonical mapping and whatever per-record errors occurred.
pub fn deduplicate<B, I>(batches: B) -> (HashMap<String, IssueRecord>, Vec<TriageError>)
where
    B: IntoIterator<Item = I>,
    I: IntoIterator<Item = IssueRecord>,
{
    let mut dedup = Deduplicator::new();
    let mut errors = Vec::new();
    for batch in batches {
        errors.extend(dedup.merge_batch(batch));
    }
    (dedup.into_map(), errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, updated_at: &str, title: &str) -> IssueRecord {
        IssueRecord {
            repository: "octo/repo".to_string(),
            url: url.to_string(),
            title: title.to_string(),
            body: String::new(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: updated_at.to_string(),
            labels: vec![],
            comments: 0,
            total_reactions: 0,
        }
    }

    #[test]
    fn newer_record_wins_in_either_input_order() {
        let january = record("https://x/1", "2024-01-01T00:00:00Z", "old");
        let february = record("https://x/1", "2024-02-01T00:00:00Z", "new");

        let (forward, _) = deduplicate(vec![vec![january.clone()], vec![february.clone()]]);
        let (reverse, _) = deduplicate(vec![vec![february], vec![january]]);

        assert_eq!(forward["https://x/1"].title, "new");
        assert_eq!(forward, reverse);
    }

    #[test]
    fn exact_tie_keeps_earliest_processed() {
        let first = record("https://x/1", "2024-01-01T00:00:00Z", "first");
        let second = record("https://x/1", "2024-01-01T00:00:00Z", "second");
        let (map, errors) = deduplicate(vec![vec![first, second]]);
        assert!(errors.is_empty());
        assert_eq!(map["https://x/1"].title, "first");
    }

    #[test]
    fn duplicates_within_one_batch_collapse() {
        let (map, _) = deduplicate(vec![vec![
            record("https://x/1", "2024-01-01T00:00:00Z", "a"),
            record("https://x/2", "2024-01-01T00:00:00Z", "b"),
            record("https://x/1", "2024-03-01T00:00:00Z", "c"),
        ]]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["https://x/1"].title, "c");
    }

    #[test]
    fn deduplicate_is_idempotent() {
        let batches = vec![
            vec![
                record("https://x/1", "2024-01-01T00:00:00Z", "a"),
                record("https://x/2", "2024-02-01T00:00:00Z", "b"),
            ],
            vec![record("https://x/1", "2024-03-01T00:00:00Z", "c")],
        ];
        let (once, _) = deduplicate(batches);
        let (twice, errors) = deduplicate(vec![once.values().cloned().collect::<Vec<_>>()]);
        assert!(errors.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn invalid_timestamp_is_reported_with_url() {
        let mut dedup = Deduplicator::new();
        let err = dedup
            .insert(record("https://x/1", "yesterday", "bad"))
            .unwrap_err();
        match err {
            TriageError::InvalidTimestamp { url, value } => {
                assert_eq!(url, "https://x/1");
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(dedup.is_empty());
    }

    #[test]
    fn bad_record_does_not_abort_batch() {
        let errors_and_map = deduplicate(vec![vec![
            record("https://x/1", "2024-01-01T00:00:00Z", "good"),
            record("", "2024-01-01T00:00:00Z", "no url"),
            record("https://x/2", "2024-01-01T00:00:00Z", "also good"),
        ]]);
        let (map, errors) = errors_and_map;
        assert_eq!(map.len(), 2);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn merge_map_applies_strictly_newer_wins() {
        let mut left = Deduplicator::new();
        left.insert(record("https://x/1", "2024-02-01T00:00:00Z", "left"))
            .unwrap();
        left.insert(record("https://x/2", "2024-01-01T00:00:00Z", "left"))
            .unwrap();

        let mut right = Deduplicator::new();
        right
            .insert(record("https://x/1", "2024-01-01T00:00:00Z", "right"))
            .unwrap();
        right
            .insert(record("https://x/2", "2024-03-01T00:00:00Z", "right"))
            .unwrap();

        left.merge_map(right.into_map());
        let map = left.into_map();
        assert_eq!(map["https://x/1"].title, "left");
        assert_eq!(map["https://x/2"].title, "right");
    }
}
