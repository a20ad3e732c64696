//! Error taxonomy for the screening pipeline

use thiserror::Error;

/// Screening errors
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// Connection-level failure while talking to the recognition service.
    /// Retried internally by the client; callers only see it once retries
    /// are exhausted, as a `RecognitionFailed`.
    #[error("transient network failure during recognition: {0}")]
    TransientNetwork(String),

    /// Recognition failed terminally: error response from the service or
    /// retries exhausted. The pipeline aborts without a verdict.
    #[error("text recognition failed: {0}")]
    RecognitionFailed(String),

    /// Degenerate input to feature extraction or a malformed feature vector.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreeningError>;
