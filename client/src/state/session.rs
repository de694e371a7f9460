//! Browser `localStorage` session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token survives reloads under a single key. Outside the browser (SSR,
//! native tests) the store is always empty and writes fail, so server
//! rendering treats every visitor as logged out until hydration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use enquiry_core::{Session, SessionError, SessionStore};

/// `localStorage` key holding the bearer token.
pub const SESSION_KEY: &str = "token";

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageSession {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(SESSION_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            // Private mode and a full quota both surface as a JS exception.
            storage()
                .ok_or(SessionError::Unavailable)?
                .set_item(SESSION_KEY, token)
                .map_err(|e| SessionError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(SessionError::Unavailable)
        }
    }

    fn remove(&self) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            match storage() {
                Some(storage) => storage
                    .remove_item(SESSION_KEY)
                    .map_err(|e| SessionError::Write(format!("{e:?}"))),
                None => Ok(()),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

/// Session handle backed by `localStorage`, provided as app context.
pub fn browser_session() -> Session {
    Session::new(LocalStorageSession)
}
