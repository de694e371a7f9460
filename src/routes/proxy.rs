//! Reverse proxy for `/api/v1/*` to the document backend.
//!
//! ERROR HANDLING
//! ==============
//! Upstream responses, including 4xx/5xx, are relayed unchanged. Only
//! failures of the hop itself are generated here, and they carry a JSON
//! `detail` so the client's error parsing treats them like backend errors.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use http_body_util::LengthLimitError;
use serde_json::json;

use crate::state::AppState;

/// Largest request body forwarded upstream. Uploads are capped at 10 MiB by
/// the backend; the rest is multipart overhead.
pub const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    TooLarge,

    #[error("request body could not be read: {0}")]
    Body(String),

    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Upstream URL for a proxied request: backend origin plus the original path
/// and query, so trailing slashes survive.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), PathAndQuery::as_str);
    format!("{}{path_and_query}", backend_url.trim_end_matches('/'))
}

/// Subset of request headers relayed upstream.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [AUTHORIZATION, CONTENT_TYPE, ACCEPT] {
        for value in headers.get_all(&name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

impl From<axum::Error> for ProxyError {
    fn from(e: axum::Error) -> Self {
        let inner = e.into_inner();
        if inner.is::<LengthLimitError>() {
            Self::TooLarge
        } else {
            Self::Body(inner.to_string())
        }
    }
}

/// Any-method handler for `/api/v1/{*path}`.
///
/// # Errors
///
/// Returns `413` when the body exceeds [`MAX_BODY_BYTES`] and `400` when it
/// cannot be read. Returns `504` when the backend times out and `502` when it
/// cannot be reached.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(ProxyError::from)
        .inspect_err(|e| tracing::warn!(error = %e, method = %parts.method, "request body rejected"))?;
    let url = upstream_url(&state.config.backend_url, &parts.uri);

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwarded_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, method = %parts.method, %url, "upstream request failed"))?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let body = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, %status, bytes = body.len(), "proxied");

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
