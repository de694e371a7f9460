//! Tagged error type shared by every request path.
//!
//! DESIGN
//! ======
//! Views never inspect raw HTTP failures. Every adapter maps its transport
//! outcome into [`ApiError`], and views render it with
//! [`ApiError::user_message`], which prefers the backend's `detail` text and
//! otherwise falls back to the call site's generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::session::SessionError;

/// Generic text shown when the backend could not be reached at all.
pub const NETWORK_FALLBACK: &str = "Unable to reach the server. Please try again later.";

/// Broad failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request never produced an HTTP response.
    Network,
    /// The backend rejected the bearer token or credentials (401/403).
    Auth,
    /// Input was rejected, locally before sending or by the backend (4xx).
    Validation,
    /// The backend failed (5xx) or answered with a body we could not decode.
    Server,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Network => "network",
            Self::Auth => "auth",
            Self::Validation => "validation",
            Self::Server => "server",
        };
        f.write_str(label)
    }
}

/// A failed client operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    /// Whether `message` is fit to show the user verbatim (backend `detail`
    /// or a local validation hint) rather than an internal description.
    pub user_facing: bool,
}

impl ApiError {
    /// Transport-level failure (DNS, refused connection, CORS, aborted fetch).
    pub fn network(reason: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Network, message: reason.into(), user_facing: false }
    }

    /// Input rejected before any request was sent.
    pub fn validation(hint: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Validation, message: hint.into(), user_facing: true }
    }

    /// A protected call was attempted with no stored token.
    #[must_use]
    pub fn not_logged_in() -> Self {
        Self {
            kind: ErrorKind::Auth,
            message: "You are not logged in.".to_owned(),
            user_facing: true,
        }
    }

    /// A 2xx response whose body did not match the expected shape.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Server, message: reason.into(), user_facing: false }
    }

    /// Classify a non-success HTTP response.
    ///
    /// `body` is the raw response text; a JSON `detail` field, when present,
    /// becomes the user-facing message.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = kind_for_status(status);
        match parse_detail(body) {
            Some(detail) => Self { kind, message: detail, user_facing: true },
            None => Self { kind, message: format!("HTTP {status}"), user_facing: false },
        }
    }

    /// Text to show the user, falling back to `fallback` when the backend
    /// gave no usable detail.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        if self.user_facing {
            return self.message.clone();
        }
        match self.kind {
            ErrorKind::Network => NETWORK_FALLBACK.to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

impl From<SessionError> for ApiError {
    /// The request succeeded but the token could not be kept, so the user
    /// is not logged in.
    fn from(e: SessionError) -> Self {
        Self { kind: ErrorKind::Server, message: format!("Could not save the session: {e}."), user_facing: true }
    }
}

fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        401 | 403 => ErrorKind::Auth,
        400..=499 => ErrorKind::Validation,
        _ => ErrorKind::Server,
    }
}

/// Extract a readable `detail` from an error body.
///
/// FastAPI returns `detail` as a string for `HTTPException` and as a list of
/// `{loc, msg, type}` objects for request validation failures.
pub fn parse_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;
    let text = match detail {
        Value::String(s) => s.trim().to_owned(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => other.get("msg").and_then(Value::as_str).map(str::to_owned),
            })
            .collect::<Vec<_>>()
            .join("; "),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}
