//! Local persistence for engagement markers.
//!
//! Reaction and view records live in a namespaced boolean key-value store
//! behind the [`KeyValueStore`] trait, so trackers never touch a concrete
//! storage medium directly. [`MemoryStore`] is the in-process
//! implementation; platform layers may substitute their own (browser local
//! storage, a file-backed map, ...). Durable namespaces survive restarts,
//! session namespaces are discarded when the session ends.

pub mod error;
pub mod memory;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use store::{KeyValueStore, Namespace, Scope};
