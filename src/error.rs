use thiserror::Error;

/// Convenience result type for query and pipeline operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type returned across the crate.
///
/// This is a single error enum shared by the transform primitives, the
/// pipeline orchestrator, and record ingestion.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A required argument has the wrong shape (empty grouping field,
    /// non-object ingestion rows, unknown ingestion format, etc.).
    #[error("input type error: {message}")]
    InputType { message: String },

    /// A `Pattern` filter holds a regular expression that does not compile.
    #[error("invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// A pipeline stage failed. Raised only by the orchestrator, wrapping the
    /// original error's message; the whole call fails and no partial result
    /// is returned.
    #[error("data processing failed: {message}")]
    PipelineFailure { message: String },
}

impl QueryError {
    /// Shorthand for [`QueryError::InputType`] with an owned message.
    pub(crate) fn input_type(message: impl Into<String>) -> Self {
        Self::InputType {
            message: message.into(),
        }
    }
}
