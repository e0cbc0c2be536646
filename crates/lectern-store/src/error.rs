use crate::store::Namespace;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("write to {namespace}/{key} failed: {message}")]
    WriteFailed {
        namespace: Namespace,
        key: String,
        message: String,
    },

    #[error("read from {namespace}/{key} failed: {message}")]
    ReadFailed {
        namespace: Namespace,
        key: String,
        message: String,
    },

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
