use crate::backend::{SummaryBackend, SummaryRequest};
use crate::config::SummarizerConfig;
use crate::error::{BackendError, Result, SummarizeError};
use std::sync::Arc;

const PROBE_TEXT: &str =
    "This is a test message to verify the summarization service connection is working properly.";

/// Resilient summarization client.
///
/// Validates and truncates input, then drives the backend with an
/// exponential-backoff retry loop for rate-limited calls. Pure apart from
/// the network call: no local state is read or written.
pub struct Summarizer {
    backend: Arc<dyn SummaryBackend>,
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(backend: Arc<dyn SummaryBackend>, config: SummarizerConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` into 2-3 sentences.
    ///
    /// Input is trimmed and internal whitespace collapsed before
    /// validation; text longer than the configured maximum is truncated to
    /// its first `max_input_chars` characters rather than rejected.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let normalized = normalize_whitespace(text);
        let length = normalized.chars().count();
        if length < self.config.min_input_chars {
            return Err(SummarizeError::InvalidInput {
                length,
                minimum: self.config.min_input_chars,
            });
        }

        let body = if length > self.config.max_input_chars {
            tracing::debug!(
                "truncating summarization input from {} to {} chars",
                length,
                self.config.max_input_chars
            );
            normalized
                .chars()
                .take(self.config.max_input_chars)
                .collect()
        } else {
            normalized
        };

        let request = SummaryRequest {
            model: self.config.model.clone(),
            system_prompt: self.config.system_prompt.clone(),
            text: body,
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
            presence_penalty: self.config.presence_penalty,
            frequency_penalty: self.config.frequency_penalty,
        };

        let mut attempt: u32 = 0;
        loop {
            match self.backend.generate(&request).await {
                Ok(summary) => {
                    tracing::debug!("summary generated on attempt {}", attempt + 1);
                    return Ok(summary);
                }
                Err(BackendError::RateLimited) => {
                    if attempt >= self.config.max_retries {
                        return Err(SummarizeError::RateLimitExceeded {
                            retries: self.config.max_retries,
                        });
                    }
                    // Saturate instead of overflowing for oversized retry budgets.
                    let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
                    let delay = self.config.base_delay.saturating_mul(factor);
                    tracing::warn!(
                        "rate limit reached, retrying in {:?} (attempt {} of {})",
                        delay,
                        attempt + 1,
                        self.config.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(BackendError::Other(cause)) => {
                    tracing::error!("summarization failed: {:#}", cause);
                    return Err(SummarizeError::Failed(cause));
                }
            }
        }
    }

    /// Check that the backend is reachable and producing summaries.
    pub async fn verify_connection(&self) -> bool {
        match self.summarize(PROBE_TEXT).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("summarization connection check failed: {}", e);
                false
            }
        }
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::Instant;

    enum Scripted {
        Summary(&'static str),
        RateLimited,
        Failure(&'static str),
    }

    /// Mock backend: pops scripted outcomes, records every request and the
    /// (virtual) time it arrived.
    struct ScriptedBackend {
        script: Mutex<VecDeque<Scripted>>,
        calls: Mutex<Vec<(SummaryRequest, Instant)>>,
    }

    impl ScriptedBackend {
        fn new(script: Vec<Scripted>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn always_rate_limited() -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn call_times(&self) -> Vec<Instant> {
            self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
        }

        fn first_request(&self) -> SummaryRequest {
            self.calls.lock().unwrap()[0].0.clone()
        }
    }

    #[async_trait]
    impl SummaryBackend for ScriptedBackend {
        async fn generate(
            &self,
            request: &SummaryRequest,
        ) -> std::result::Result<String, BackendError> {
            self.calls
                .lock()
                .unwrap()
                .push((request.clone(), Instant::now()));
            match self.script.lock().unwrap().pop_front() {
                Some(Scripted::Summary(text)) => Ok(text.to_string()),
                Some(Scripted::RateLimited) | None => Err(BackendError::RateLimited),
                Some(Scripted::Failure(message)) => {
                    Err(BackendError::Other(anyhow::anyhow!(message)))
                }
            }
        }
    }

    fn summarizer(backend: Arc<ScriptedBackend>) -> Summarizer {
        Summarizer::new(backend, SummarizerConfig::default())
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_without_a_request() {
        let backend = ScriptedBackend::new(vec![Scripted::Summary("unused")]);
        let result = summarizer(backend.clone()).summarize("").await;

        assert!(matches!(
            result,
            Err(SummarizeError::InvalidInput { length: 0, .. })
        ));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_short_input_is_rejected() {
        let backend = ScriptedBackend::new(vec![Scripted::Summary("unused")]);
        let result = summarizer(backend.clone()).summarize("hi").await;

        assert!(matches!(
            result,
            Err(SummarizeError::InvalidInput { length: 2, minimum: 10 })
        ));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_input_counts_as_empty() {
        let backend = ScriptedBackend::new(vec![Scripted::Summary("unused")]);
        let result = summarizer(backend.clone()).summarize("  \n\t  ").await;

        assert!(matches!(
            result,
            Err(SummarizeError::InvalidInput { length: 0, .. })
        ));
    }

    #[tokio::test]
    async fn test_valid_input_returns_summary() {
        let backend = ScriptedBackend::new(vec![Scripted::Summary("A tidy summary.")]);
        let text = "a".repeat(50);
        let summary = summarizer(backend.clone()).summarize(&text).await.unwrap();

        assert_eq!(summary, "A tidy summary.");
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_whitespace_is_normalized_before_sending() {
        let backend = ScriptedBackend::new(vec![Scripted::Summary("ok")]);
        summarizer(backend.clone())
            .summarize("  one   two\n\nthree\tfour five six  ")
            .await
            .unwrap();

        assert_eq!(backend.first_request().text, "one two three four five six");
    }

    #[tokio::test]
    async fn test_overlong_input_is_truncated_not_rejected() {
        let backend = ScriptedBackend::new(vec![Scripted::Summary("ok")]);
        let text = "b".repeat(3000);
        summarizer(backend.clone()).summarize(&text).await.unwrap();

        assert_eq!(backend.first_request().text.chars().count(), 2000);
    }

    #[tokio::test]
    async fn test_request_carries_fixed_parameters() {
        let backend = ScriptedBackend::new(vec![Scripted::Summary("ok")]);
        summarizer(backend.clone())
            .summarize("an article body long enough to pass validation")
            .await
            .unwrap();

        let request = backend.first_request();
        assert_eq!(request.temperature, 0.5);
        assert_eq!(request.max_output_tokens, 250);
        assert_eq!(request.presence_penalty, 0.1);
        assert_eq!(request.frequency_penalty, 0.1);
        assert!(request.system_prompt.contains("2-3"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_schedule_then_rate_limit_exceeded() {
        let backend = ScriptedBackend::always_rate_limited();
        let start = Instant::now();
        let result = summarizer(backend.clone())
            .summarize("an article body long enough to pass validation")
            .await;

        assert!(matches!(
            result,
            Err(SummarizeError::RateLimitExceeded { retries: 5 })
        ));

        // Initial attempt plus five retries.
        assert_eq!(backend.call_count(), 6);

        // Delays between attempts: 1s, 2s, 4s, 8s, 16s.
        let times = backend.call_times();
        let gaps: Vec<Duration> = times.windows(2).map(|w| w[1] - w[0]).collect();
        assert_eq!(
            gaps,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
                Duration::from_secs(16),
            ]
        );
        assert_eq!(start.elapsed(), Duration::from_secs(31));
    }

    #[tokio::test(start_paused = true)]
    async fn test_oversized_retry_budget_saturates_delay() {
        // Past attempt 31 the exponential factor no longer fits in u32;
        // the delay must saturate rather than panic.
        let backend = ScriptedBackend::always_rate_limited();
        let config = SummarizerConfig::new()
            .with_retry_policy(35, Duration::from_millis(1));
        let result = Summarizer::new(backend.clone(), config)
            .summarize("an article body long enough to pass validation")
            .await;

        assert!(matches!(
            result,
            Err(SummarizeError::RateLimitExceeded { retries: 35 })
        ));
        assert_eq!(backend.call_count(), 36);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_then_success_recovers() {
        let backend = ScriptedBackend::new(vec![
            Scripted::RateLimited,
            Scripted::RateLimited,
            Scripted::Summary("eventually fine"),
        ]);
        let start = Instant::now();
        let summary = summarizer(backend.clone())
            .summarize("an article body long enough to pass validation")
            .await
            .unwrap();

        assert_eq!(summary, "eventually fine");
        assert_eq!(backend.call_count(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_rate_limit_failure_does_not_retry() {
        let backend = ScriptedBackend::new(vec![Scripted::Failure("model unavailable")]);
        let start = Instant::now();
        let result = summarizer(backend.clone())
            .summarize("an article body long enough to pass validation")
            .await;

        match result {
            Err(SummarizeError::Failed(cause)) => {
                assert!(cause.to_string().contains("model unavailable"));
            }
            other => panic!("expected Failed, got {:?}", other.map(|_| ())),
        }
        assert_eq!(backend.call_count(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_verify_connection_reports_backend_health() {
        let healthy = ScriptedBackend::new(vec![Scripted::Summary("probe ok")]);
        assert!(summarizer(healthy).verify_connection().await);

        let broken = ScriptedBackend::new(vec![Scripted::Failure("boom")]);
        assert!(!summarizer(broken).verify_connection().await);
    }
}
