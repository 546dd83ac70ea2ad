pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const CONFIG_FILE: &str = ".ghtriage-config.json";

pub const DEFAULT_MAX_ISSUES_PER_REPO: usize = 30;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;
pub const DEFAULT_LIST_LIMIT: usize = 50;

// CSV column headers, shared by the reader and writer so snapshots from
// different invocations stay mergeable.
pub const CSV_HEADERS: [&str; 9] = [
    "Repository",
    "Issue URL",
    "Issue Title",
    "Issue Body",
    "Created At",
    "Updated At",
    "Labels",
    "Comments",
    "Total Reactions",
];
