//! Auth form state for the login and signup views.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use enquiry_core::Route;
use enquiry_core::flows::{LOGIN_FAILED, SIGNUP_FAILED};

/// Query-string flag set on `/login` after a successful signup.
pub const REGISTERED_FLAG: &str = "registered";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Signup",
        }
    }

    /// Generic text shown when the backend gives no error detail.
    pub fn failure_text(self) -> &'static str {
        match self {
            Self::Login => LOGIN_FAILED,
            Self::Signup => SIGNUP_FAILED,
        }
    }

    /// The other mode, offered as a link under the form.
    pub fn alternate(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    pub fn route(self) -> Route {
        match self {
            Self::Login => Route::Login,
            Self::Signup => Route::Signup,
        }
    }
}

/// Login target after a successful signup, carrying the confirmation flag.
pub fn login_after_signup_path() -> String {
    format!("{}?{REGISTERED_FLAG}=1", Route::Login.path())
}

/// Form fields plus the request flag and status line.
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub username: String,
    pub password: String,
    pub message: Option<String>,
    pub loading: bool,
}

impl AuthFormState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.message = None;
    }

    pub fn finish(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.message = Some(message.into());
    }
}
