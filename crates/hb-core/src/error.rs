/// Alias for `Result<T, HbError>`.
pub type HbResult<T> = Result<T, HbError>;

/// Errors that can occur when building dates, lengths, or loading data files.
#[derive(Debug, thiserror::Error)]
pub enum HbError {
    /// A date component is out of range (year 0, day outside 1..=28, unknown season).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A hibernation length string could not be parsed.
    #[error("invalid hibernation length: \"{0}\"")]
    InvalidLength(String),

    /// Reading a data file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON for the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
