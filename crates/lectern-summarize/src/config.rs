use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_SYSTEM_PROMPT: &str = "You are a concise summarizer. Summarize \
the following article in 2-3 clear, informative sentences:";

/// Fixed generation parameters and resilience policy for the summarizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    /// Inputs shorter than this (after normalization) are rejected.
    pub min_input_chars: usize,
    /// Inputs longer than this are truncated before sending.
    pub max_input_chars: usize,
    /// Retry budget for rate-limited calls.
    pub max_retries: u32,
    /// Delay before retry `n` is `base_delay * 2^n`.
    pub base_delay: Duration,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: 0.5,
            max_output_tokens: 250,
            presence_penalty: 0.1,
            frequency_penalty: 0.1,
            min_input_chars: 10,
            max_input_chars: 2000,
            max_retries: 5,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    pub fn with_input_bounds(mut self, min_chars: usize, max_chars: usize) -> Self {
        self.min_input_chars = min_chars;
        self.max_input_chars = max_chars;
        self
    }

    pub fn with_retry_policy(mut self, max_retries: u32, base_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.base_delay = base_delay;
        self
    }
}
