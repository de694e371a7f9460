//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session and HTTP adapter from Leptos context and
//! render shared chrome (route guard, navigation actions, transcript, picker).

pub mod document_picker;
pub mod protected;
pub mod session_actions;
pub mod transcript_view;
