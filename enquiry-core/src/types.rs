//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Response types only require the fields the client acts on and tolerate
//! everything else, so backend additions never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Username/password pair entered in the auth view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// JSON body for `POST /api/v1/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful `POST /api/v1/users/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// One entry of the document picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Backend identifier (UUID string, or a number rendered as a string).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    /// Processing status (`pending`, `processing`, `completed`, ...), if sent.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Document record returned by the upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// JSON body for `POST /api/v1/documents/query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub document_id: String,
    pub question: String,
}

/// Answer returned by the query endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub source_documents: Option<Vec<String>>,
}

fn id_from_value(value: serde_json::Value) -> Result<String, String> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(format!("expected string or number id, got {other}")),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value).map_err(D::Error::custom)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => id_from_value(value).map(Some).map_err(D::Error::custom),
    }
}
