pub mod issues;
pub mod utils;

pub use issues::{print_issues, sort_records, SortKey};
