use super::*;

#[test]
fn expired_token_suggests_login() {
    let err = response_error(401, r#"{"message":"jwt expired"}"#);
    assert!(matches!(err, CliError::SessionRejected(_)));
    assert_eq!(err.to_string(), "jwt expired; run `school-cli login` and set SCHOOL_ACCESS_TOKEN");
}

#[test]
fn other_statuses_stay_api_errors() {
    let err = response_error(404, r#"{"error":"Student not found"}"#);
    assert!(matches!(err, CliError::Api(ApiError::Server { status: 404, .. })));
}

#[tokio::test]
async fn protected_call_without_token_fails_before_sending() {
    let ctx = CliContext {
        base_url: "http://127.0.0.1:9".to_owned(),
        site_url: "http://127.0.0.1:9".to_owned(),
        token: None,
        timeout: Duration::from_secs(1),
    };
    let err = api_request(&ctx, reqwest::Method::GET, "/students", None).await.unwrap_err();
    assert!(matches!(err, CliError::SessionRejected(ApiError::Unauthenticated)));
}
