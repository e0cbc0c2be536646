use async_trait::async_trait;
use lectern_types::CounterField;
use thiserror::Error;

/// A counter update that did not reach the remote article store.
///
/// The corresponding local marker is never committed when this is
/// returned, so the caller can surface the failure and retry later.
#[derive(Error, Debug)]
#[error("remote update of {field} for article '{article_id}' failed: {message}")]
pub struct RemoteUpdateError {
    pub article_id: String,
    pub field: CounterField,
    pub message: String,
}

impl RemoteUpdateError {
    pub fn new(
        article_id: impl Into<String>,
        field: CounterField,
        message: impl Into<String>,
    ) -> Self {
        Self {
            article_id: article_id.into(),
            field,
            message: message.into(),
        }
    }
}

/// Remote article store boundary consumed by the trackers.
///
/// `update_counter` sets an **absolute** value; the caller is solely
/// responsible for computing the correct next value from its last-known
/// baseline. This is why overlapping updates to the same article must
/// never interleave.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn update_counter(
        &self,
        article_id: &str,
        field: CounterField,
        value: u64,
    ) -> std::result::Result<(), RemoteUpdateError>;
}
