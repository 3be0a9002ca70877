use super::*;

#[test]
fn fresh_app_waits_for_restore_before_redirecting() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn restored_without_token_redirects() {
    assert!(should_redirect_unauth(&AuthState::restored(None, None)));
    assert!(should_redirect_unauth(&AuthState::restored(Some(String::new()), None)));
}

#[test]
fn restored_session_stays_put() {
    assert!(!should_redirect_unauth(&AuthState::restored(Some("tok".to_owned()), None)));
}

#[test]
fn logout_redirects() {
    assert!(should_redirect_unauth(&AuthState::signed_out()));
}
