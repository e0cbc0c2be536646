//! High-level builder API for wiring the engagement core

use anyhow::{Context, Result};
use lectern_engage::{ArticleStore, ReactionTracker, ViewCounter};
use lectern_store::{KeyValueStore, MemoryStore};
use lectern_summarize::{OpenAiBackend, Summarizer, SummarizerConfig, SummaryBackend};
use std::sync::Arc;

/// Builder for the [`Engagement`] facade.
///
/// # Example
///
/// ```rust,no_run
/// use lectern::prelude::*;
///
/// # fn example(article_store: std::sync::Arc<dyn lectern::ArticleStore>) -> Result<()> {
/// let engagement = EngagementBuilder::new()
///     .article_store(article_store)
///     .openai_key("sk-...")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct EngagementBuilder {
    store: Option<Arc<dyn KeyValueStore>>,
    remote: Option<Arc<dyn ArticleStore>>,
    backend: Option<Arc<dyn SummaryBackend>>,
    openai_key: Option<String>,
    summarizer_config: SummarizerConfig,
}

impl Default for EngagementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngagementBuilder {
    /// Create a new builder with sensible defaults
    pub fn new() -> Self {
        Self {
            store: None,
            remote: None,
            backend: None,
            openai_key: None,
            summarizer_config: SummarizerConfig::default(),
        }
    }

    /// Set the local persistence store (default: a fresh [`MemoryStore`])
    pub fn key_value_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the remote article store (required)
    pub fn article_store(mut self, remote: Arc<dyn ArticleStore>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Set a custom summarization backend
    pub fn summary_backend(mut self, backend: Arc<dyn SummaryBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set an OpenAI API key; used to build the default backend when no
    /// custom backend is supplied
    pub fn openai_key(mut self, key: impl Into<String>) -> Self {
        self.openai_key = Some(key.into());
        self
    }

    /// Set the summarizer configuration (default: the service contract
    /// defaults)
    pub fn summarizer_config(mut self, config: SummarizerConfig) -> Self {
        self.summarizer_config = config;
        self
    }

    /// Build the engagement facade
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No article store is set
    /// - Neither a summary backend nor an OpenAI API key is set
    /// - The OpenAI backend cannot be constructed from the key
    pub fn build(self) -> Result<Engagement> {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn KeyValueStore>);
        let remote = self
            .remote
            .context("An article store is required. Call .article_store(...)")?;

        let backend: Arc<dyn SummaryBackend> = match self.backend {
            Some(backend) => backend,
            None => {
                let key = self.openai_key.context(
                    "A summary backend or OpenAI API key is required. \
                     Call .summary_backend(...) or .openai_key(...)",
                )?;
                Arc::new(OpenAiBackend::new(key)?)
            }
        };

        Ok(Engagement {
            reactions: ReactionTracker::new(store.clone(), remote.clone()),
            views: ViewCounter::new(store, remote),
            summarizer: Summarizer::new(backend, self.summarizer_config),
        })
    }
}

/// The engagement core, constructed once and shared by every article view.
pub struct Engagement {
    reactions: ReactionTracker,
    views: ViewCounter,
    summarizer: Summarizer,
}

impl Engagement {
    pub fn reactions(&self) -> &ReactionTracker {
        &self.reactions
    }

    pub fn views(&self) -> &ViewCounter {
        &self.views
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }
}
