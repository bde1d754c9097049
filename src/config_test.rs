use super::*;

// =============================================================================
// defaults
// =============================================================================

#[test]
fn from_values_defaults_when_absent() {
    let cfg = AppConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
}

#[test]
fn from_values_treats_blank_as_absent() {
    let cfg = AppConfig::from_values(Some("   "), Some("")).unwrap();
    assert_eq!(cfg, AppConfig::default());
}

// =============================================================================
// base URL
// =============================================================================

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = AppConfig::from_values(Some("https://api.example.test/"), None).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.test");
}

#[test]
fn from_values_rejects_relative_base_url() {
    let err = AppConfig::from_values(Some("api.example.test"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("api.example.test".to_owned()));
}

// =============================================================================
// timeout
// =============================================================================

#[test]
fn from_values_parses_timeout_override() {
    let cfg = AppConfig::from_values(None, Some("2500")).unwrap();
    assert_eq!(cfg.request_timeout_ms, 2500);
}

#[test]
fn from_values_rejects_zero_timeout() {
    let err = AppConfig::from_values(None, Some("0")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout("0".to_owned()));
}

#[test]
fn from_values_rejects_non_numeric_timeout() {
    let err = AppConfig::from_values(None, Some("soon")).unwrap_err();
    assert!(err.to_string().contains("soon"));
}
