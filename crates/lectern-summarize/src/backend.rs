use crate::error::BackendError;
use async_trait::async_trait;

/// One summarization request, fully resolved by the [`Summarizer`] before
/// it reaches the backend. Ephemeral; never persisted.
///
/// [`Summarizer`]: crate::Summarizer
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub model: String,
    pub system_prompt: String,
    pub text: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

/// Remote summarization boundary.
///
/// Implementations must classify throttling as
/// [`BackendError::RateLimited`]; the retry policy depends on it.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    async fn generate(&self, request: &SummaryRequest) -> Result<String, BackendError>;
}
