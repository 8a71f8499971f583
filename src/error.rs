use thiserror::Error;

/// Error types that can occur while scoring and ranking candidates.
#[derive(Debug, Error)]
pub enum RankError {
    /// HTTP request/response errors talking to the scoring oracle
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Authentication and authorization errors
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Invalid pipeline input or configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Errors returned by the scoring oracle itself
    #[error("Oracle error: {0}")]
    OracleError(String),
    /// Oracle response does not match the expected judgment schema
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// Retry attempts exceeded
    #[error("Retry attempts exceeded after {attempts} tries: {last_error}")]
    RetryExceeded { attempts: usize, last_error: String },
    /// Whole-batch deadline expired during dispatch
    #[error("Batch cancelled: deadline of {deadline_ms}ms expired")]
    Cancelled { deadline_ms: u64 },
    /// Generic error
    #[error("Generic error: {0}")]
    Generic(String),
}

/// Converts reqwest HTTP errors into RankErrors
impl From<reqwest::Error> for RankError {
    fn from(err: reqwest::Error) -> Self {
        RankError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        RankError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
