use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Durability of a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Survives restarts; bound to the device holding the store.
    Durable,
    /// Discarded when the browsing session ends.
    Session,
}

/// The namespaces the engagement trackers write to.
///
/// Each namespace maps an article id to a boolean marker and is written
/// only by its owning tracker; reads are safe from any caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Namespace {
    LikedArticles,
    DislikedArticles,
    ViewedArticles,
}

impl Namespace {
    pub fn scope(&self) -> Scope {
        match self {
            Namespace::LikedArticles | Namespace::DislikedArticles => Scope::Durable,
            Namespace::ViewedArticles => Scope::Session,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::LikedArticles => "likedArticles",
            Namespace::DislikedArticles => "dislikedArticles",
            Namespace::ViewedArticles => "viewedArticles",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Injectable key-value repository used by the engagement trackers.
///
/// Operations are synchronous: local persistence is never a suspension
/// point, only remote calls are.
pub trait KeyValueStore: Send + Sync {
    /// Read a marker; `None` means the key was never written.
    fn get(&self, namespace: Namespace, key: &str) -> Result<Option<bool>>;

    /// Write a marker.
    fn set(&self, namespace: Namespace, key: &str, value: bool) -> Result<()>;

    /// Whether the key has ever been written.
    fn has(&self, namespace: Namespace, key: &str) -> Result<bool> {
        Ok(self.get(namespace, key)?.is_some())
    }
}
