//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser HTTP adapter behind `enquiry_core::Backend`; wire
//! types and error classification come from `enquiry-core`.

pub mod api;
