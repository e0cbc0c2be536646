use crate::remote::RemoteUpdateError;
use lectern_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngageError {
    /// A counter update failed remotely; no local state was committed.
    #[error(transparent)]
    RemoteUpdate(#[from] RemoteUpdateError),

    /// A toggle for this article is already in flight. Counter updates
    /// carry absolute values, so overlapping toggles are rejected rather
    /// than interleaved.
    #[error("a reaction update for article '{article_id}' is already in flight")]
    ToggleInFlight { article_id: String },

    /// The local persistence store could not be read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, EngageError>;
