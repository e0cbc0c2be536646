use crate::error::{EngageError, Result};
use crate::remote::ArticleStore;
use lectern_store::{KeyValueStore, Namespace};
use lectern_types::{CounterField, Reaction};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Last-known like/dislike counts, supplied by the caller from the
/// article's most recent render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: u64,
    pub dislikes: u64,
}

impl ReactionCounts {
    pub fn new(likes: u64, dislikes: u64) -> Self {
        Self { likes, dislikes }
    }
}

/// Result of a toggle: the counts after the update and the reaction now
/// recorded for the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub counts: ReactionCounts,
    pub reaction: Reaction,
}

/// Which direction a toggle moves the reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Like,
    Dislike,
}

impl Side {
    fn reaction(self) -> Reaction {
        match self {
            Side::Like => Reaction::Liked,
            Side::Dislike => Reaction::Disliked,
        }
    }

    fn opposite(self) -> Side {
        match self {
            Side::Like => Side::Dislike,
            Side::Dislike => Side::Like,
        }
    }

    fn field(self) -> CounterField {
        match self {
            Side::Like => CounterField::Likes,
            Side::Dislike => CounterField::Dislikes,
        }
    }

    fn namespace(self) -> Namespace {
        match self {
            Side::Like => Namespace::LikedArticles,
            Side::Dislike => Namespace::DislikedArticles,
        }
    }

    fn count(self, counts: ReactionCounts) -> u64 {
        match self {
            Side::Like => counts.likes,
            Side::Dislike => counts.dislikes,
        }
    }

    fn count_mut(self, counts: &mut ReactionCounts) -> &mut u64 {
        match self {
            Side::Like => &mut counts.likes,
            Side::Dislike => &mut counts.dislikes,
        }
    }
}

/// Tracks a user's Like/Dislike/None choice per article.
///
/// At most one of the liked/disliked markers is true for an article at any
/// time. Toggles first undo the opposite reaction remotely, then apply the
/// new one; each local marker is written only after its remote update
/// succeeded. A second toggle for the same article while one is pending is
/// rejected with [`EngageError::ToggleInFlight`].
pub struct ReactionTracker {
    store: Arc<dyn KeyValueStore>,
    remote: Arc<dyn ArticleStore>,
    in_flight: Mutex<HashSet<String>>,
}

/// Releases the per-article in-flight slot on every exit path.
struct FlightGuard<'a> {
    tracker: &'a ReactionTracker,
    article_id: String,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self
            .tracker
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        in_flight.remove(&self.article_id);
    }
}

impl ReactionTracker {
    pub fn new(store: Arc<dyn KeyValueStore>, remote: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            remote,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Record a like for the article.
    ///
    /// Re-liking an already liked article is a no-op and performs no
    /// remote call. If the article is currently disliked, the dislike is
    /// undone remotely before the like is applied.
    pub async fn toggle_like(
        &self,
        article_id: &str,
        baseline: ReactionCounts,
    ) -> Result<ToggleOutcome> {
        self.toggle(article_id, baseline, Side::Like).await
    }

    /// Record a dislike for the article. Symmetric to [`toggle_like`].
    ///
    /// [`toggle_like`]: ReactionTracker::toggle_like
    pub async fn toggle_dislike(
        &self,
        article_id: &str,
        baseline: ReactionCounts,
    ) -> Result<ToggleOutcome> {
        self.toggle(article_id, baseline, Side::Dislike).await
    }

    /// The reaction currently recorded for the article.
    pub fn reaction_for(&self, article_id: &str) -> Result<Reaction> {
        if self.store.get(Namespace::LikedArticles, article_id)? == Some(true) {
            return Ok(Reaction::Liked);
        }
        if self.store.get(Namespace::DislikedArticles, article_id)? == Some(true) {
            return Ok(Reaction::Disliked);
        }
        Ok(Reaction::None)
    }

    async fn toggle(
        &self,
        article_id: &str,
        baseline: ReactionCounts,
        side: Side,
    ) -> Result<ToggleOutcome> {
        let _guard = self.begin(article_id)?;

        let current = self.reaction_for(article_id)?;
        if current == side.reaction() {
            tracing::debug!(
                "article {} is already {:?}, toggle is a no-op",
                article_id,
                current
            );
            return Ok(ToggleOutcome {
                counts: baseline,
                reaction: current,
            });
        }

        let mut counts = baseline;

        // Undo the opposite reaction first. The remote store takes absolute
        // values, so this must complete before the new reaction is applied.
        if current == side.opposite().reaction() {
            let undone = side.opposite().count(counts).saturating_sub(1);
            self.remote
                .update_counter(article_id, side.opposite().field(), undone)
                .await?;
            *side.opposite().count_mut(&mut counts) = undone;
            self.write_marker(side.opposite().namespace(), article_id, false);
        }

        let applied = side.count(counts) + 1;
        self.remote
            .update_counter(article_id, side.field(), applied)
            .await?;
        *side.count_mut(&mut counts) = applied;
        self.write_marker(side.namespace(), article_id, true);

        Ok(ToggleOutcome {
            counts,
            reaction: side.reaction(),
        })
    }

    fn begin<'a>(&'a self, article_id: &str) -> Result<FlightGuard<'a>> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert(article_id.to_string()) {
            return Err(EngageError::ToggleInFlight {
                article_id: article_id.to_string(),
            });
        }
        Ok(FlightGuard {
            tracker: self,
            article_id: article_id.to_string(),
        })
    }

    // Marker durability is best-effort: a failed local write is logged and
    // the operation still succeeds, since the remote update already did.
    fn write_marker(&self, namespace: Namespace, article_id: &str, value: bool) {
        if let Err(e) = self.store.set(namespace, article_id, value) {
            tracing::warn!(
                "best-effort marker write {}={} for article {} failed: {}",
                namespace,
                value,
                article_id,
                e
            );
        }
    }
}
