pub mod classifier;
pub mod dedup;
pub mod labels;
pub mod rules;

pub use classifier::{Classifier, TriageRequest};
pub use dedup::{deduplicate, Deduplicator};
pub use labels::normalize_labels;
pub use rules::{RuleCategory, RuleTables};
