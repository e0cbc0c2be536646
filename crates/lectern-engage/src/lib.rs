//! Engagement tracking for articles.
//!
//! Two trackers own the engagement state of the reading surface:
//!
//! - [`ReactionTracker`] keeps the Like/Dislike/None choice per article
//!   mutually exclusive and synchronizes counter values to the remote
//!   article store.
//! - [`ViewCounter`] registers a view at most once per (session, article)
//!   pair.
//!
//! Both compute the next counter value from a caller-supplied baseline and
//! push it through the [`ArticleStore`] trait as an absolute value. Local
//! markers are committed only after the remote update succeeds, so a
//! failed update stays retryable.

pub mod error;
pub mod reactions;
pub mod remote;
pub mod views;

pub use error::{EngageError, Result};
pub use reactions::{ReactionCounts, ReactionTracker, ToggleOutcome};
pub use remote::{ArticleStore, RemoteUpdateError};
pub use views::{ViewCounter, ViewOutcome};
