//! Injectable session store holding the single bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser backs the store with `localStorage`, the CLI with a file, and
//! tests with [`MemorySession`]. Callers hold a cloneable [`Session`] handle
//! and read the token at call time; nothing caches authorization state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::endpoints::bearer;

/// A token write or removal that did not reach the backing store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The store does not exist in this environment (no `localStorage`).
    #[error("session storage is unavailable")]
    Unavailable,

    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Persistence backend for the bearer token.
pub trait SessionStore: Send + Sync {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error when the value could not be persisted.
    fn store(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored value. Removing an absent value succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when a stored value could not be removed.
    fn remove(&self) -> Result<(), SessionError>;
}

/// In-memory store for tests and short-lived processes.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemorySession {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Shared handle to the process-wide session.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Fresh in-memory session with no token.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemorySession::default())
    }

    /// Current token. An empty stored value counts as no session.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.trim().is_empty())
    }

    /// # Errors
    ///
    /// Returns the store's error when the token was not persisted.
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.store(token)
    }

    /// # Errors
    ///
    /// Returns the store's error when the token could not be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.remove()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `Authorization` header value for the current token.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|t| bearer(&t))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("authenticated", &self.is_authenticated()).finish()
    }
}
