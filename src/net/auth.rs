//! Authentication endpoints behind the [`AuthApi`] seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only talks to the API through this trait, so tests can
//! substitute a scripted implementation for the browser HTTP client.

use async_trait::async_trait;

use super::error::ApiError;
use super::http::ApiClient;
use super::types::{AuthResponse, CurrentUserResponse, Identity, LoginRequest, SignupRequest};

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const CURRENT_USER_PATH: &str = "/user";

/// Authentication operations consumed by the session store.
///
/// Futures are not `Send`: the browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange email and password for a credential and identity.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Register a new identity and receive its credential.
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError>;

    /// Ask the API to invalidate the current credential.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Resolve the identity behind the attached credential.
    async fn current_user(&self) -> Result<Identity, ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post(LOGIN_PATH, request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post(SIGNUP_PATH, request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty(LOGOUT_PATH).await
    }

    async fn current_user(&self) -> Result<Identity, ApiError> {
        let body: CurrentUserResponse = self.get(CURRENT_USER_PATH).await?;
        Ok(body.user)
    }
}
