// OpenAI chat-completions backend (HTTP direct, no SDK)

use crate::backend::{SummaryBackend, SummaryRequest};
use crate::error::BackendError;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Summarization backend backed by the OpenAI chat completions endpoint.
pub struct OpenAiBackend {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenAiBackend {
    /// Create a new backend with an API key.
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: OPENAI_API_BASE.to_string(),
        })
    }

    /// Create a backend from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
        Self::new(api_key)
    }

    /// Override the API base URL (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_payload(&self, request: &SummaryRequest) -> Value {
        serde_json::json!({
            "model": request.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.text },
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_output_tokens,
            "presence_penalty": request.presence_penalty,
            "frequency_penalty": request.frequency_penalty,
        })
    }
}

#[async_trait]
impl SummaryBackend for OpenAiBackend {
    async fn generate(&self, request: &SummaryRequest) -> Result<String, BackendError> {
        let payload = self.build_payload(request);

        tracing::debug!(
            "sending summarization request ({} chars) to {}",
            request.text.chars().count(),
            self.base_url
        );

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                BackendError::Other(anyhow!(e).context("summarization request could not be sent"))
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(BackendError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Other(anyhow!(
                "summarization service returned {}: {}",
                status,
                body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            BackendError::Other(anyhow!(e).context("failed to parse summarization response"))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| BackendError::Other(anyhow!("no summary generated")))
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
