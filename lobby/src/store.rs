//! Typed session persistence over a string key-value backend.
//!
//! ARCHITECTURE
//! ============
//! Two layers:
//! - [`KeyValue`] is the raw backend (browser `localStorage`, or an in-memory
//!   map in tests). It only moves strings.
//! - [`SessionStore`] speaks in [`Session`] records and owns the key scheme
//!   and JSON encoding. [`JsonSessionStore`] is the one implementation; it
//!   works over any `KeyValue`.
//!
//! A missing key, an unparseable value and a record whose `id` disagrees with
//! its key are distinct errors here. Callers decide whether to collapse them
//! (the lobby flow treats all three as "not found").

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::fmt;

use crate::session::Session;

/// Namespace prefix for every persisted session key.
pub const KEY_PREFIX: &str = "cameleon_game_";

/// Error returned by key-value backends and [`SessionStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no record under {0}")]
    NotFound(SessionKey),
    #[error("malformed record under {key}: {source}")]
    Malformed {
        key: SessionKey,
        #[source]
        source: serde_json::Error,
    },
    #[error("record under {key} belongs to session {found:?}")]
    Mismatched { key: SessionKey, found: String },
    #[error("failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage key for one session: `cameleon_game_<id>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    #[must_use]
    pub fn for_session(id: &str) -> Self {
        Self(format!("{KEY_PREFIX}{id}"))
    }

    /// Session id this key was built from.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.0[KEY_PREFIX.len()..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw string key-value backend.
pub trait KeyValue {
    /// Read the value under `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// `StoreError::Unavailable` when the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// `StoreError::Unavailable` when the backend rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend used by tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryKeyValue {
    entries: HashMap<String, String>,
}

impl MemoryKeyValue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, bypassing any decoding.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValue for MemoryKeyValue {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Session-level persistence.
pub trait SessionStore {
    /// Load the session stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` when absent, `Malformed` when the stored text does not
    /// decode, `Unavailable` when the backend fails.
    fn load(&self, id: &str) -> Result<Session, StoreError>;

    /// Persist `session` under its own id, overwriting any previous record.
    ///
    /// # Errors
    ///
    /// `Encode` or `Unavailable`.
    fn save(&mut self, session: &Session) -> Result<(), StoreError>;

    /// Whether a readable session exists under `id`.
    ///
    /// Malformed and mismatched records count as absent so a broken entry can
    /// be replaced.
    ///
    /// # Errors
    ///
    /// Only backend failures propagate.
    fn exists(&self, id: &str) -> Result<bool, StoreError> {
        match self.load(id) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_) | StoreError::Malformed { .. } | StoreError::Mismatched { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// JSON-encoded sessions over any [`KeyValue`] backend.
#[derive(Clone, Debug, Default)]
pub struct JsonSessionStore<K> {
    backend: K,
}

impl<K: KeyValue> JsonSessionStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }
}

impl<K: KeyValue> SessionStore for JsonSessionStore<K> {
    fn load(&self, id: &str) -> Result<Session, StoreError> {
        let key = SessionKey::for_session(id);
        let Some(raw) = self.backend.get_item(key.as_str())? else {
            return Err(StoreError::NotFound(key));
        };
        let session: Session =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed { key: key.clone(), source })?;
        if session.id != id {
            return Err(StoreError::Mismatched { key, found: session.id });
        }
        Ok(session)
    }

    fn save(&mut self, session: &Session) -> Result<(), StoreError> {
        let key = SessionKey::for_session(&session.id);
        let raw = serde_json::to_string(session).map_err(StoreError::Encode)?;
        self.backend.set_item(key.as_str(), &raw)
    }
}
