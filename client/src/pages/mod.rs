//! Route-level page modules.

pub mod auth;
pub mod home;
pub mod query;
pub mod select;
pub mod upload;
