use super::*;
use crate::net::types::Identity;

// =============================================================
// endpoint_url
// =============================================================

#[test]
fn endpoint_url_joins_absolute_path() {
    assert_eq!(endpoint_url("http://localhost:5000", "/auth/login"), "http://localhost:5000/auth/login");
}

#[test]
fn endpoint_url_inserts_missing_slash() {
    assert_eq!(endpoint_url("http://localhost:5000", "user"), "http://localhost:5000/user");
}

#[test]
fn endpoint_url_avoids_double_slash() {
    assert_eq!(endpoint_url("https://api.test/", "/user"), "https://api.test/user");
}

#[test]
fn client_endpoint_uses_configured_base() {
    let client = ApiClient::new(AppConfig::from_values(Some("https://api.test"), None).unwrap());
    assert_eq!(client.endpoint("/api/tutorials"), "https://api.test/api/tutorials");
}

// =============================================================
// classify_failure
// =============================================================

#[test]
fn classify_failure_maps_401_to_unauthorized_with_error_text() {
    let err = classify_failure(401, r#"{"error":"Invalid email or password"}"#);
    assert_eq!(err, ApiError::Unauthorized { status: 401, message: Some("Invalid email or password".to_owned()) });
    assert!(err.is_auth_failure());
    assert_eq!(err.server_message(), Some("Invalid email or password"));
}

#[test]
fn classify_failure_falls_back_to_message_field() {
    let err = classify_failure(400, r#"{"message":"Email already registered"}"#);
    assert_eq!(err, ApiError::Response { status: 400, message: Some("Email already registered".to_owned()) });
    assert!(!err.retryable());
}

#[test]
fn classify_failure_tolerates_non_json_body() {
    let err = classify_failure(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Response { status: 502, message: None });
    assert!(err.retryable());
}

// =============================================================
// decode_body
// =============================================================

#[test]
fn decode_body_reports_parse_errors() {
    let err = decode_body::<Identity>("{}").unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

// =============================================================
// native build
// =============================================================

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn requests_are_unavailable_without_browser() {
    let client = ApiClient::new(AppConfig::default());
    let err = client.get::<Identity>("/user").await.unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}
