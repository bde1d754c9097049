use super::*;

// =============================================================================
// cookie strings
// =============================================================================

#[test]
fn session_cookie_expires_after_one_day() {
    assert_eq!(session_cookie("abc.def"), "jwt_token=abc.def; Max-Age=86400; Path=/; SameSite=Lax");
}

#[test]
fn expired_cookie_clears_value() {
    assert_eq!(expired_cookie(), "jwt_token=; Max-Age=0; Path=/; SameSite=Lax");
}

#[test]
fn read_cookie_finds_named_value() {
    let header = "theme=dark; jwt_token=abc.def; lang=ja";
    assert_eq!(read_cookie(header, SESSION_COOKIE).as_deref(), Some("abc.def"));
}

#[test]
fn read_cookie_ignores_empty_and_missing() {
    assert_eq!(read_cookie("jwt_token=", SESSION_COOKIE), None);
    assert_eq!(read_cookie("theme=dark", SESSION_COOKIE), None);
    assert_eq!(read_cookie("", SESSION_COOKIE), None);
}

// =============================================================================
// MemoryCredentials
// =============================================================================

#[test]
fn memory_credentials_save_then_clear() {
    let store = MemoryCredentials::default();
    assert!(store.token().is_none());
    store.save("t-1");
    assert_eq!(store.token().as_deref(), Some("t-1"));
    store.clear();
    assert!(store.token().is_none());
}
