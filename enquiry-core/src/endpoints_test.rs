use super::*;

#[test]
fn routes_trim_trailing_slash_from_base() {
    let routes = ApiRoutes::new("http://localhost:8000/");
    assert_eq!(routes.base(), "http://localhost:8000");
    assert_eq!(routes.login(), "http://localhost:8000/api/v1/users/login");
    assert_eq!(routes.signup(), "http://localhost:8000/api/v1/users/");
}

#[test]
fn empty_base_yields_same_origin_paths() {
    let routes = ApiRoutes::new("");
    assert_eq!(routes.upload(), "/api/v1/documents/");
    assert_eq!(routes.query(), "/api/v1/documents/query");
}

#[test]
fn documents_url_carries_paging() {
    let routes = ApiRoutes::new("");
    assert_eq!(routes.documents(0, DOCUMENT_PAGE_SIZE), "/api/v1/documents?skip=0&limit=10");
    assert_eq!(routes.documents(20, 5), "/api/v1/documents?skip=20&limit=5");
}

#[test]
fn document_routes_embed_id() {
    let routes = ApiRoutes::new("http://api");
    assert_eq!(routes.document("abc"), "http://api/api/v1/documents/abc");
    assert_eq!(routes.document_status("abc"), "http://api/api/v1/documents/status/abc");
}

#[test]
fn login_form_is_password_grant() {
    let creds = Credentials { username: "a@b.com".to_owned(), password: "x".to_owned() };
    let form = login_form(&creds);
    assert_eq!(form[0], ("grant_type", "password".to_owned()));
    assert!(form.contains(&("username", "a@b.com".to_owned())));
    assert!(form.contains(&("password", "x".to_owned())));
    assert!(form.contains(&("scope", String::new())));
}

#[test]
fn signup_request_maps_username_to_email() {
    let creds = Credentials { username: "a@b.com".to_owned(), password: "x".to_owned() };
    let body = serde_json::to_value(signup_request(&creds)).expect("json");
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "x" }));
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("tok123"), "Bearer tok123");
}
