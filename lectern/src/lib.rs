//! # Lectern - Engagement Core for Content-Reading Apps
//!
//! Lectern is the engagement-state and resilient-summarization core of a
//! content-reading application:
//!
//! - **Reaction tracking** (mutually exclusive like/dislike per article,
//!   no duplicate counting)
//! - **View counting** (at most once per session and article)
//! - **Resilient summarization** (validation, truncation, typed
//!   rate-limit classification, exponential backoff)
//! - **Injectable persistence** (namespaced key-value store with an
//!   in-memory implementation)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lectern::prelude::*;
//!
//! # async fn example(article_store: std::sync::Arc<dyn lectern::ArticleStore>) -> anyhow::Result<()> {
//! let engagement = EngagementBuilder::new()
//!     .article_store(article_store)
//!     .openai_key(std::env::var("OPENAI_API_KEY")?)
//!     .build()?;
//!
//! // Register a view once per session.
//! let view = engagement.views().register_view("art-42", 117).await?;
//! println!("views: {}", view.views);
//!
//! // Toggle a like from the last-known counts.
//! let outcome = engagement
//!     .reactions()
//!     .toggle_like("art-42", ReactionCounts::new(10, 2))
//!     .await?;
//! println!("likes: {}", outcome.counts.likes);
//!
//! // Summarize the article body.
//! let summary = engagement.summarizer().summarize("...article text...").await?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Lectern consists of several composable crates:
//!
//! - **lectern-types**: Shared data model (Article, Counters, Reaction)
//! - **lectern-store**: Local persistence boundary and in-memory store
//! - **lectern-engage**: Reaction tracker and view counter
//! - **lectern-summarize**: Summarization client with backoff retry

// Re-export all public APIs
pub use lectern_engage as engage;
pub use lectern_store as store;
pub use lectern_summarize as summarize;
pub use lectern_types as types;

// Re-export commonly used types
pub use lectern_engage::{
    ArticleStore, EngageError, ReactionCounts, ReactionTracker, RemoteUpdateError,
    ToggleOutcome, ViewCounter, ViewOutcome,
};
pub use lectern_store::{KeyValueStore, MemoryStore, Namespace, StoreError};
pub use lectern_summarize::{
    BackendError, OpenAiBackend, SummarizeError, Summarizer, SummarizerConfig, SummaryBackend,
};
pub use lectern_types::{Article, CounterField, Counters, Reaction, SessionId};

/// High-level builder wiring the trackers and summarizer together
pub mod builder;

/// Convenient prelude with commonly used types
pub mod prelude {
    pub use crate::builder::{Engagement, EngagementBuilder};
    pub use crate::engage::{ReactionCounts, ToggleOutcome, ViewOutcome};
    pub use crate::store::MemoryStore;
    pub use crate::summarize::SummarizerConfig;
    pub use crate::types::{Article, Counters, Reaction};
    pub use anyhow::Result;
}
