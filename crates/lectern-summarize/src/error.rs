use thiserror::Error;

/// Failure classification at the remote-client boundary.
///
/// Only [`BackendError::RateLimited`] is retried; everything else fails
/// the summarization immediately.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("summarization service is rate limiting requests")]
    RateLimited,

    #[error("summarization request failed: {0}")]
    Other(anyhow::Error),
}

#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The input was empty or too short after whitespace normalization.
    #[error("input is too short to summarize ({length} characters, minimum {minimum})")]
    InvalidInput { length: usize, minimum: usize },

    /// Every rate-limited attempt was retried and the budget is exhausted.
    #[error("rate limit reached, giving up after {retries} retries")]
    RateLimitExceeded { retries: u32 },

    /// A non-retryable remote failure, wrapping the underlying cause.
    #[error("summarization failed: {0}")]
    Failed(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
