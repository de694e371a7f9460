//! User-facing routes and the session guard for protected views.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Select,
    Upload,
    Query,
}

impl Route {
    pub const ALL: [Route; 6] =
        [Route::Home, Route::Login, Route::Signup, Route::Select, Route::Upload, Route::Query];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Select => "/select",
            Self::Upload => "/upload",
            Self::Query => "/query",
        }
    }

    /// Protected routes require a stored token.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Select | Self::Upload | Self::Query)
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

/// Outcome of checking a route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Decide whether `route` may render for the given session.
#[must_use]
pub fn guard(route: Route, session: &Session) -> GuardDecision {
    if route.is_protected() && !session.is_authenticated() {
        GuardDecision::Redirect(Route::Login)
    } else {
        GuardDecision::Render
    }
}
