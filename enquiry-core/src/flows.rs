//! Request orchestration shared by the browser views and the CLI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow validates its input, reads the session at call time, issues at
//! most one backend call through [`Backend`], and hands back a typed result.
//! Validation failures return before the backend is touched.
//!
//! TRADE-OFFS
//! ==========
//! The trait is `?Send` because browser fetch futures are not `Send`; the
//! CLI awaits flows directly on its runtime and never needs to spawn them.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use async_trait::async_trait;

use crate::endpoints::{DOCUMENT_PAGE_SIZE, login_form, signup_request};
use crate::error::ApiError;
use crate::forms::{MISSING_FILE, SelectedFile, validate_credentials, validate_query, validate_upload};
use crate::route::Route;
use crate::session::Session;
use crate::transcript::Transcript;
use crate::types::{DocumentRef, QueryAnswer, QueryRequest, SignupRequest, TokenResponse, UploadReceipt};

pub const LOGIN_FAILED: &str = "Login failed.";
pub const SIGNUP_SUCCEEDED: &str = "Signup successful. Please log in.";
pub const SIGNUP_FAILED: &str = "Signup failed.";
pub const UPLOAD_SUCCEEDED: &str = "File uploaded successfully";
pub const UPLOAD_FAILED: &str = "Error uploading file";
pub const QUERY_FAILED: &str = "Error querying document";

/// HTTP adapter for the backend REST API.
///
/// `authorization` arguments are complete header values (`Bearer ...`).
#[async_trait(?Send)]
pub trait Backend {
    /// Transport-specific handle to the file being uploaded.
    type Upload;

    async fn signup(&self, body: &SignupRequest) -> Result<(), ApiError>;

    async fn login(&self, form: &[(&'static str, String)]) -> Result<TokenResponse, ApiError>;

    async fn list_documents(&self, authorization: &str, skip: u32, limit: u32) -> Result<Vec<DocumentRef>, ApiError>;

    async fn upload(&self, authorization: &str, title: &str, file: Self::Upload) -> Result<UploadReceipt, ApiError>;

    async fn query(&self, authorization: &str, request: &QueryRequest) -> Result<QueryAnswer, ApiError>;
}

/// Log in and store the returned token. Returns the route to navigate to.
///
/// # Errors
///
/// Returns a validation error for blank fields, the backend's error, or a
/// server error when the response carries no token or the token could not
/// be stored. The session holds no new token on any failure.
pub async fn login<B: Backend + ?Sized>(
    backend: &B,
    session: &Session,
    username: &str,
    password: &str,
) -> Result<Route, ApiError> {
    let credentials = validate_credentials(username, password)?;
    let token = backend.login(&login_form(&credentials)).await?;
    if token.access_token.trim().is_empty() {
        return Err(ApiError::malformed("login response did not include an access token"));
    }
    session.set_token(&token.access_token)?;
    log::debug!("login succeeded");
    Ok(Route::Select)
}

/// Register a new account. Returns the confirmation text to show.
///
/// # Errors
///
/// Returns a validation error for blank fields or the backend's error.
pub async fn signup<B: Backend + ?Sized>(backend: &B, username: &str, password: &str) -> Result<&'static str, ApiError> {
    let credentials = validate_credentials(username, password)?;
    backend.signup(&signup_request(&credentials)).await?;
    log::debug!("signup succeeded");
    Ok(SIGNUP_SUCCEEDED)
}

/// Drop the session. Returns the route to navigate to.
///
/// # Errors
///
/// Returns an error when the stored token could not be removed; the user is
/// then still logged in.
pub fn logout(session: &Session) -> Result<Route, ApiError> {
    session.clear()?;
    Ok(Route::Login)
}

/// Fetch the first page of documents for the picker.
///
/// Any failure, including a missing session, degrades to an empty list.
pub async fn load_documents<B: Backend + ?Sized>(backend: &B, session: &Session) -> Vec<DocumentRef> {
    let Some(authorization) = session.authorization() else {
        log::warn!("document list skipped: no session");
        return Vec::new();
    };
    match backend.list_documents(&authorization, 0, DOCUMENT_PAGE_SIZE).await {
        Ok(documents) => documents,
        Err(e) => {
            log::warn!("document list failed: {e}");
            Vec::new()
        }
    }
}

/// Upload the selected file, using its name as the document title.
///
/// # Errors
///
/// Returns a validation error when no file is selected or it is too large,
/// an auth error when no session exists, or the backend's error.
pub async fn upload<B: Backend + ?Sized>(
    backend: &B,
    session: &Session,
    selected: Option<(SelectedFile, B::Upload)>,
) -> Result<UploadReceipt, ApiError> {
    let Some((meta, file)) = selected else {
        return Err(ApiError::validation(MISSING_FILE));
    };
    validate_upload(Some(&meta))?;
    let authorization = session.authorization().ok_or_else(ApiError::not_logged_in)?;
    log::debug!("uploading {} ({} bytes)", meta.name, meta.size);
    backend.upload(&authorization, &meta.name, file).await
}

/// Status line for a finished upload.
#[must_use]
pub fn upload_message(result: &Result<UploadReceipt, ApiError>) -> String {
    match result {
        Ok(receipt) => match receipt.status.as_deref() {
            Some(status) => format!("{UPLOAD_SUCCEEDED} (status: {status})"),
            None => UPLOAD_SUCCEEDED.to_owned(),
        },
        Err(e) => e.user_message(UPLOAD_FAILED),
    }
}

/// Send an already-validated question.
///
/// # Errors
///
/// Returns an auth error when no session exists, or the backend's error.
pub async fn query<B: Backend + ?Sized>(
    backend: &B,
    session: &Session,
    request: &QueryRequest,
) -> Result<QueryAnswer, ApiError> {
    let authorization = session.authorization().ok_or_else(ApiError::not_logged_in)?;
    log::debug!("querying document {}", request.document_id);
    backend.query(&authorization, request).await
}

/// Transcript text for a query outcome: the answer, or the error text.
#[must_use]
pub fn answer_text(result: Result<QueryAnswer, ApiError>) -> String {
    match result {
        Ok(answer) => answer.answer,
        Err(e) => e.user_message(QUERY_FAILED),
    }
}

/// Validate, then record the question and its answer in `transcript`.
///
/// # Errors
///
/// Returns a validation error, leaving the transcript untouched, when the
/// document or question is missing. Backend failures are recorded as the
/// answer text rather than returned.
pub async fn ask<B: Backend + ?Sized>(
    backend: &B,
    session: &Session,
    transcript: &mut Transcript,
    document_id: &str,
    question: &str,
) -> Result<(), ApiError> {
    let request = validate_query(document_id, question)?;
    transcript.push_question(request.question.clone());
    let outcome = query(backend, session, &request).await;
    transcript.push_answer(answer_text(outcome));
    Ok(())
}
