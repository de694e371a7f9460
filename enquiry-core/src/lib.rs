//! Shared client model for the Document Enquiry backend.
//!
//! This crate owns everything the browser client and the CLI agree on: the
//! REST wire types, endpoint paths, the injectable session store, the route
//! guard, form validation, the chat transcript, and the request flows that
//! tie them together. Transport lives behind [`flows::Backend`] so each
//! front end brings its own HTTP stack (`gloo-net` in WASM, `reqwest` on the
//! command line).

pub mod endpoints;
pub mod error;
pub mod flows;
pub mod forms;
pub mod route;
pub mod session;
pub mod transcript;
pub mod types;

pub use endpoints::{ApiRoutes, DOCUMENT_PAGE_SIZE};
pub use error::{ApiError, ErrorKind};
pub use flows::Backend;
pub use route::{GuardDecision, Route, guard};
pub use session::{MemorySession, Session, SessionError, SessionStore};
pub use transcript::{ChatMessage, Role, Transcript};
pub use types::{Credentials, DocumentRef, QueryAnswer, QueryRequest, TokenResponse, UploadReceipt};
