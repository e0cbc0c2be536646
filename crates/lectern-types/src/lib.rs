//! Shared data model for the Lectern engagement core.
//!
//! These types are exchanged between the trackers, the summarization
//! client, and the rendering layer that consumes them.

pub mod article;
pub mod identity;
pub mod reaction;

pub use article::{Article, CounterField, Counters};
pub use identity::{DeviceId, SessionId};
pub use reaction::Reaction;
