//! Client-side form checks run before any request is issued.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::error::ApiError;
use crate::types::{Credentials, QueryRequest};

/// Largest upload the backend accepts.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const MISSING_CREDENTIALS: &str = "Please enter both a username and a password.";
pub const MISSING_FILE: &str = "Please select a file to upload.";
pub const FILE_TOO_LARGE: &str = "File is too large (maximum 10 MB).";
pub const MISSING_DOCUMENT: &str = "Please select a document.";
pub const MISSING_QUESTION: &str = "Please enter a question.";

/// Metadata of the file chosen in the upload picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Require both credential fields. The username is trimmed; the password is
/// taken as typed.
///
/// # Errors
///
/// Returns a validation error when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, ApiError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::validation(MISSING_CREDENTIALS));
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Require exactly one selected file within the size limit.
///
/// # Errors
///
/// Returns a validation error when nothing is selected or the file is too
/// large.
pub fn validate_upload(selected: Option<&SelectedFile>) -> Result<&SelectedFile, ApiError> {
    let file = selected.ok_or_else(|| ApiError::validation(MISSING_FILE))?;
    if file.size > MAX_UPLOAD_BYTES {
        return Err(ApiError::validation(FILE_TOO_LARGE));
    }
    Ok(file)
}

/// Require a document and a non-blank question.
///
/// # Errors
///
/// Returns a validation error naming the first missing field.
pub fn validate_query(document_id: &str, question: &str) -> Result<QueryRequest, ApiError> {
    let document_id = document_id.trim();
    let question = question.trim();
    if document_id.is_empty() {
        return Err(ApiError::validation(MISSING_DOCUMENT));
    }
    if question.is_empty() {
        return Err(ApiError::validation(MISSING_QUESTION));
    }
    Ok(QueryRequest { document_id: document_id.to_owned(), question: question.to_owned() })
}
