//! Resilient article summarization.
//!
//! [`Summarizer`] wraps a remote chat-completion service behind the
//! [`SummaryBackend`] trait: it normalizes and validates the input,
//! truncates overlong text, and retries rate-limited calls with
//! exponential backoff. Failure classification is typed at the backend
//! boundary ([`BackendError::RateLimited`] vs [`BackendError::Other`]),
//! so the retry policy never inspects error message text.
//!
//! [`OpenAiBackend`] is the production backend (HTTP direct, no SDK).

pub mod backend;
pub mod config;
pub mod error;
pub mod openai;
pub mod summarizer;

pub use backend::{SummaryBackend, SummaryRequest};
pub use config::SummarizerConfig;
pub use error::{BackendError, Result, SummarizeError};
pub use openai::OpenAiBackend;
pub use summarizer::Summarizer;
