use super::*;

#[test]
fn from_response_uses_json_message() {
    let err = ApiError::from_response(400, r#"{"message":"Phone already registered"}"#);
    assert_eq!(
        err,
        ApiError::Server { status: 400, message: "Phone already registered".to_owned() }
    );
    assert_eq!(err.to_string(), "Phone already registered");
}

#[test]
fn from_response_falls_back_to_error_key() {
    let err = ApiError::from_response(404, r#"{"error":"Student not found"}"#);
    assert_eq!(err.to_string(), "Student not found");
}

#[test]
fn from_response_without_json_keeps_status_only() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502 });
    assert_eq!(err.to_string(), "request failed with status 502");
}

#[test]
fn from_response_ignores_blank_message() {
    let err = ApiError::from_response(500, r#"{"message":"   "}"#);
    assert_eq!(err, ApiError::Status { status: 500 });
}

#[test]
fn status_is_none_for_transport_failures() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Status { status: 418 }.status(), Some(418));
}

#[test]
fn auth_failures_are_detected() {
    assert!(ApiError::Status { status: 401 }.is_auth_failure());
    assert!(ApiError::Unauthenticated.is_auth_failure());
    assert!(!ApiError::Status { status: 500 }.is_auth_failure());
}
