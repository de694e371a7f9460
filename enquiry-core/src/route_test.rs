use super::*;

#[test]
fn public_routes_always_render() {
    let session = Session::in_memory();
    for route in [Route::Home, Route::Login, Route::Signup] {
        assert_eq!(guard(route, &session), GuardDecision::Render);
    }
}

#[test]
fn protected_routes_redirect_without_token() {
    let session = Session::in_memory();
    for route in [Route::Select, Route::Upload, Route::Query] {
        assert_eq!(guard(route, &session), GuardDecision::Redirect(Route::Login));
    }
}

#[test]
fn protected_routes_render_with_token() {
    let session = Session::in_memory();
    session.set_token("tok").unwrap();
    assert_eq!(guard(Route::Query, &session), GuardDecision::Render);
}

#[test]
fn logout_then_protected_access_redirects() {
    let session = Session::in_memory();
    session.set_token("tok").unwrap();
    assert_eq!(guard(Route::Upload, &session), GuardDecision::Render);
    session.clear().unwrap();
    assert_eq!(guard(Route::Upload, &session), GuardDecision::Redirect(Route::Login));
}

#[test]
fn from_path_round_trips_and_normalizes() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/select/"), Some(Route::Select));
    assert_eq!(Route::from_path(""), Some(Route::Home));
    assert_eq!(Route::from_path("/admin"), None);
}
