use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("GitHub token not found. Please run 'ghtriage auth' to configure.")]
    TokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Record for '{url}' is missing required field '{field}'")]
    MissingField { url: String, field: &'static str },

    #[error("Record for '{url}' has unparseable timestamp '{value}'")]
    InvalidTimestamp { url: String, value: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type TriageResult<T> = Result<T, TriageError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> TriageResult<T>;
    fn with_context<F>(self, f: F) -> TriageResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> TriageResult<T> {
        self.map_err(|e| TriageError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> TriageResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TriageError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> TriageResult<T> {
        self.ok_or_else(|| TriageError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> TriageResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| TriageError::Unknown(f()))
    }
}
