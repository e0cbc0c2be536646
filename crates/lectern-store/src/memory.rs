use crate::error::Result;
use crate::store::{KeyValueStore, Namespace, Scope};
use lectern_types::SessionId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// In-memory [`KeyValueStore`] implementation.
///
/// Also the test fake for the trackers: it keeps the same namespace
/// semantics as a platform store, including discarding session-scoped
/// entries when [`MemoryStore::end_session`] is called.
pub struct MemoryStore {
    entries: RwLock<HashMap<(Namespace, String), bool>>,
    session: RwLock<SessionId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            session: RwLock::new(SessionId::generate()),
        }
    }

    /// Identity of the current browsing session.
    pub fn session_id(&self) -> SessionId {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// End the current session: drop every session-scoped entry and start
    /// a fresh session identity. Durable namespaces are untouched.
    pub fn end_session(&self) -> SessionId {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.retain(|(namespace, _), _| namespace.scope() == Scope::Durable);

        let next = SessionId::generate();
        let mut session = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *session = next.clone();
        tracing::debug!("session ended, new session {}", next);
        next
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: Namespace, key: &str) -> Result<Option<bool>> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(&(namespace, key.to_string())).copied())
    }

    fn set(&self, namespace: Namespace, key: &str, value: bool) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert((namespace, key.to_string()), value);
        Ok(())
    }
}
