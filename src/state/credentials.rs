//! Session credential storage.
//!
//! The API issues an opaque token on login/signup. In the browser it lives in
//! a one-day cookie that `fetch` attaches automatically; application code never
//! reads it back for requests.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "jwt_token";
pub const SESSION_COOKIE_MAX_AGE_SECS: u32 = 86_400;

/// Where the session credential is kept between requests.
pub trait CredentialStore {
    fn save(&self, token: &str);
    fn clear(&self);
    fn token(&self) -> Option<String>;
}

/// Cookie-backed store used by the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieCredentials;

impl CredentialStore for CookieCredentials {
    fn save(&self, token: &str) {
        write_cookie(&session_cookie(token));
    }

    fn clear(&self) {
        write_cookie(&expired_cookie());
    }

    fn token(&self) -> Option<String> {
        document_cookies().and_then(|header| read_cookie(&header, SESSION_COOKIE))
    }
}

/// Process-local store for non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: Mutex<Option<String>>,
}

impl CredentialStore for MemoryCredentials {
    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }

    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }
}

fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Max-Age={SESSION_COOKIE_MAX_AGE_SECS}; Path=/; SameSite=Lax")
}

fn expired_cookie() -> String {
    format!("{SESSION_COOKIE}=; Max-Age=0; Path=/; SameSite=Lax")
}

/// Find a cookie value in a `document.cookie`-style header.
fn read_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "csr")]
fn write_cookie(value: &str) {
    let Some(doc) = html_document() else {
        log::warn!("no document available for session cookie");
        return;
    };
    if doc.set_cookie(value).is_err() {
        log::warn!("failed to write session cookie");
    }
}

#[cfg(not(feature = "csr"))]
fn write_cookie(_value: &str) {}

#[cfg(feature = "csr")]
fn document_cookies() -> Option<String> {
    html_document()?.cookie().ok()
}

#[cfg(not(feature = "csr"))]
fn document_cookies() -> Option<String> {
    None
}
