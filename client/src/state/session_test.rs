#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn browser_session_is_empty_outside_browser() {
    let session = browser_session();
    assert!(!session.is_authenticated());
}

#[test]
fn writes_fail_outside_browser() {
    let session = browser_session();
    assert_eq!(session.set_token("tok123"), Err(SessionError::Unavailable));
    assert_eq!(session.token(), None);
    assert_eq!(session.clear(), Ok(()));
}
