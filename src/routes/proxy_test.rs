use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{any, get};

use super::*;
use crate::config::HostConfig;

fn state_for(backend_url: &str) -> AppState {
    AppState::new(HostConfig { port: 0, backend_url: backend_url.to_owned(), upstream_timeout_secs: 2 }).unwrap()
}

/// Serves `app` on an ephemeral local port and returns its origin.
async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

/// Upstream handler that reports what it received.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let seen = json!({
        "method": method.as_str(),
        "path_and_query": uri.path_and_query().map(PathAndQuery::as_str),
        "authorization": header("authorization"),
        "cookie": header("cookie"),
        "body": body,
    });
    (StatusCode::ACCEPTED, [(CONTENT_TYPE, "application/vnd.enquiry+json")], seen.to_string()).into_response()
}

fn echo_upstream() -> Router {
    Router::new()
        .route("/api/v1/missing", get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "Document not found" }))) }))
        .route("/api/v1/{*rest}", any(echo))
}

async fn json_of(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn detail_of(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    value["detail"].as_str().unwrap_or_default().to_owned()
}

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_path_query_and_trailing_slash() {
    let uri: Uri = "/api/v1/documents?skip=0&limit=10".parse().unwrap();
    assert_eq!(upstream_url("http://backend:8000", &uri), "http://backend:8000/api/v1/documents?skip=0&limit=10");

    let uri: Uri = "/api/v1/documents/".parse().unwrap();
    assert_eq!(upstream_url("http://backend:8000/", &uri), "http://backend:8000/api/v1/documents/");
}

// =============================================================================
// forwarded_headers
// =============================================================================

#[test]
fn forwarded_headers_keeps_only_allowed_names() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok123"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert("cookie", HeaderValue::from_static("sid=1"));
    headers.insert("host", HeaderValue::from_static("localhost:3000"));

    let out = forwarded_headers(&headers);

    assert_eq!(out.len(), 3);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer tok123");
    assert!(out.get("cookie").is_none());
    assert!(out.get("host").is_none());
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn oversized_body_is_rejected_before_upstream() {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/documents/")
        .body(Body::from(vec![0_u8; MAX_BODY_BYTES + 1]))
        .unwrap();

    let err = forward(State(state_for("http://127.0.0.1:9")), request).await.unwrap_err();

    assert!(matches!(err, ProxyError::TooLarge));
    assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn unreadable_body_is_bad_request() {
    let chunks = futures::stream::iter(vec![
        Ok(b"partial".to_vec()),
        Err(std::io::Error::other("connection reset")),
    ]);
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/query/")
        .body(Body::from_stream(chunks))
        .unwrap();

    let err = forward(State(state_for("http://127.0.0.1:9")), request).await.unwrap_err();
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(detail_of(response).await.contains("connection reset"));
}

#[tokio::test]
async fn upstream_response_is_relayed_with_query_and_authorization() {
    let origin = spawn_upstream(echo_upstream()).await;
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/query/?trace=1")
        .header(AUTHORIZATION, "Bearer tok123")
        .header(CONTENT_TYPE, "application/json")
        .header("cookie", "sid=1")
        .body(Body::from(r#"{"document_id":"5","question":"q"}"#))
        .unwrap();

    let response = forward(State(state_for(&origin)), request).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/vnd.enquiry+json");
    let seen = json_of(response).await;
    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["path_and_query"], "/api/v1/query/?trace=1");
    assert_eq!(seen["authorization"], "Bearer tok123");
    assert_eq!(seen["cookie"], serde_json::Value::Null);
    assert_eq!(seen["body"], r#"{"document_id":"5","question":"q"}"#);
}

#[tokio::test]
async fn upstream_error_status_is_relayed_unchanged() {
    let origin = spawn_upstream(echo_upstream()).await;
    let request = axum::http::Request::builder().uri("/api/v1/missing").body(Body::empty()).unwrap();

    let response = forward(State(state_for(&origin)), request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(detail_of(response).await, "Document not found");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway_with_detail() {
    // Port 9 (discard) is not listening on test hosts.
    let request = axum::http::Request::builder().uri("/api/v1/documents?skip=0&limit=10").body(Body::empty()).unwrap();

    let err = forward(State(state_for("http://127.0.0.1:9")), request).await.unwrap_err();
    let response = err.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(detail_of(response).await.starts_with("backend unreachable"));
}
