//! Backend endpoint paths and request payload builders.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::types::{Credentials, SignupRequest};

/// Fixed page size used by the query view's document picker.
pub const DOCUMENT_PAGE_SIZE: u32 = 10;

/// Prefix shared by every backend route.
pub const API_PREFIX: &str = "/api/v1";

/// Absolute URL builder rooted at the backend base URL.
///
/// An empty base yields same-origin paths, which is what the browser client
/// uses behind the web host's proxy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRoutes {
    base: String,
}

impl ApiRoutes {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base)
    }

    #[must_use]
    pub fn signup(&self) -> String {
        self.url("/users/")
    }

    #[must_use]
    pub fn login(&self) -> String {
        self.url("/users/login")
    }

    #[must_use]
    pub fn documents(&self, skip: u32, limit: u32) -> String {
        self.url(&format!("/documents?skip={skip}&limit={limit}"))
    }

    #[must_use]
    pub fn upload(&self) -> String {
        self.url("/documents/")
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.url("/documents/query")
    }

    #[must_use]
    pub fn document(&self, id: &str) -> String {
        self.url(&format!("/documents/{id}"))
    }

    #[must_use]
    pub fn document_status(&self, id: &str) -> String {
        self.url(&format!("/documents/status/{id}"))
    }
}

/// OAuth2 password-grant fields for the login form body.
///
/// The backend's token endpoint only reads `username` and `password`, but
/// the remaining fields keep the payload a well-formed password grant.
#[must_use]
pub fn login_form(credentials: &Credentials) -> Vec<(&'static str, String)> {
    vec![
        ("grant_type", "password".to_owned()),
        ("username", credentials.username.clone()),
        ("password", credentials.password.clone()),
        ("scope", String::new()),
        ("client_id", "string".to_owned()),
        ("client_secret", "string".to_owned()),
    ]
}

/// JSON registration body. The backend keys accounts by email, and the
/// username field of the auth form carries it.
#[must_use]
pub fn signup_request(credentials: &Credentials) -> SignupRequest {
    SignupRequest { email: credentials.username.clone(), password: credentials.password.clone() }
}

/// `Authorization` header value for a stored token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
