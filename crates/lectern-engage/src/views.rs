use crate::error::Result;
use crate::remote::ArticleStore;
use lectern_store::{KeyValueStore, Namespace};
use lectern_types::CounterField;
use std::sync::Arc;

/// Result of a view registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOutcome {
    /// The view count after this call.
    pub views: u64,
    /// Whether this call actually incremented the remote counter.
    pub counted: bool,
}

/// Registers a view at most once per (session, article) pair.
///
/// The first successful registration in a session pushes
/// `views = baseline + 1` to the remote store and marks the article as
/// viewed; later calls in the same session return the cached count without
/// a network call. A failed remote update leaves the marker unset so the
/// next render retries.
pub struct ViewCounter {
    store: Arc<dyn KeyValueStore>,
    remote: Arc<dyn ArticleStore>,
}

impl ViewCounter {
    pub fn new(store: Arc<dyn KeyValueStore>, remote: Arc<dyn ArticleStore>) -> Self {
        Self { store, remote }
    }

    pub async fn register_view(
        &self,
        article_id: &str,
        baseline_views: u64,
    ) -> Result<ViewOutcome> {
        if self.store.get(Namespace::ViewedArticles, article_id)? == Some(true) {
            return Ok(ViewOutcome {
                views: baseline_views,
                counted: false,
            });
        }

        let next = baseline_views + 1;
        self.remote
            .update_counter(article_id, CounterField::Views, next)
            .await?;

        if let Err(e) = self
            .store
            .set(Namespace::ViewedArticles, article_id, true)
        {
            tracing::warn!(
                "best-effort view marker for article {} failed: {}",
                article_id,
                e
            );
        }

        Ok(ViewOutcome {
            views: next,
            counted: true,
        })
    }
}
