use super::*;

#[test]
fn default_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restored_ignores_empty_token() {
    let state = AuthState::restored(Some(String::new()), None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn signed_in_copies_token_and_user() {
    let tokens: AuthTokens = serde_json::from_value(serde_json::json!({
        "accessToken": "acc",
        "refreshToken": "ref",
        "user": { "_id": "u1", "name": "Head Office", "role": "admin" }
    }))
    .unwrap();
    let state = AuthState::signed_in(&tokens);
    assert_eq!(state.token.as_deref(), Some("acc"));
    assert_eq!(state.display_name(), "Head Office");
}

#[test]
fn display_name_falls_back_without_user() {
    assert_eq!(AuthState::signed_out().display_name(), "Admin");
}

#[test]
fn rejected_session_signs_out() {
    let out = AuthState::after_failure(&ApiError::Status { status: 401 }).unwrap();
    assert!(!out.is_authenticated());
    assert!(!out.loading);
    assert!(AuthState::after_failure(&ApiError::Unauthenticated).is_some());
}

#[test]
fn other_failures_keep_the_session() {
    assert_eq!(AuthState::after_failure(&ApiError::Status { status: 500 }), None);
    assert_eq!(AuthState::after_failure(&ApiError::Network("offline".to_owned())), None);
}
