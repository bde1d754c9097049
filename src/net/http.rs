//! Credentialed JSON transport over the browser `fetch` API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with the session cookie
//! attached (`credentials: include`) and an abort timer per request.
//! Native builds: every call fails with [`ApiError::Unavailable`] since the
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified by status: 401/403 become
//! `Unauthorized`, everything else `Response`, both carrying the server's
//! `error`/`message` text so forms can show it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::ErrorBody;
use crate::config::AppConfig;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Shared REST client. Cheap to clone; provided to pages via context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: Arc<AppConfig>,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.config.api_base_url, path)
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, non-2xx status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send::<()>(HttpMethod::Get, path, None).await?;
        decode_body(&text)
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let text = self.send(HttpMethod::Post, path, Some(body)).await?;
        decode_body(&text)
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let text = self.send(HttpMethod::Put, path, Some(body)).await?;
        decode_body(&text)
    }

    /// `PATCH` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let text = self.send(HttpMethod::Patch, path, Some(body)).await?;
        decode_body(&text)
    }

    /// `DELETE` a resource, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, or non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send::<()>(HttpMethod::Delete, path, None).await.map(|_| ())
    }

    /// `POST` without a body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, or non-2xx status.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send::<()>(HttpMethod::Post, path, None).await.map(|_| ())
    }

    /// Send a request and return the raw body of a successful response.
    #[cfg(feature = "csr")]
    async fn send<B: Serialize>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<String, ApiError> {
        use std::cell::Cell;
        use std::rc::Rc;

        use gloo_net::http::Request;

        let url = self.endpoint(path);
        let controller =
            web_sys::AbortController::new().map_err(|_| ApiError::Request("AbortController unavailable".to_owned()))?;
        let signal = controller.signal();
        let timed_out = Rc::new(Cell::new(false));
        let timer_flag = Rc::clone(&timed_out);
        // Dropping the timer at the end of this function cancels it.
        let _timer = gloo_timers::callback::Timeout::new(self.config.request_timeout_ms, move || {
            timer_flag.set(true);
            controller.abort();
        });

        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include)
        .header("content-type", "application/json")
        .abort_signal(Some(&signal));

        let request = match body {
            Some(payload) => builder.json(payload),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        let fail = |e: gloo_net::Error| {
            if timed_out.get() { ApiError::Timeout } else { ApiError::Request(e.to_string()) }
        };
        let resp = request.send().await.map_err(fail)?;
        let status = resp.status();
        let ok = resp.ok();
        let text = resp.text().await.map_err(fail)?;
        if !ok {
            log::warn!("{method:?} {path} failed with status {status}");
            return Err(classify_failure(status, &text));
        }
        Ok(text)
    }

    #[cfg(not(feature = "csr"))]
    async fn send<B: Serialize>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<String, ApiError> {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
}

/// Map a non-2xx status and body to an error, keeping the server's text.
fn classify_failure(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.error.or(parsed.message);
    match status {
        401 | 403 => ApiError::Unauthorized { status, message },
        _ => ApiError::Response { status, message },
    }
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}
