//! View-local state models.
//!
//! DESIGN
//! ======
//! Each page owns one plain state struct behind a single `RwSignal`; nothing
//! here is shared across views except the session handle in `session`.

pub mod auth;
pub mod query;
pub mod session;
pub mod upload;
