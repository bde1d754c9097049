//! Error taxonomy for REST calls.

/// Errors produced by API client operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The request was aborted after the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The API rejected the credential or the supplied login details.
    #[error("unauthorized: status {status}")]
    Unauthorized { status: u16, message: Option<String> },

    /// The API returned another non-success status.
    #[error("API response error: status {status}")]
    Response { status: u16, message: Option<String> },

    /// The response body could not be decoded.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// HTTP is only available in the browser build.
    #[error("HTTP client not available in this build")]
    Unavailable,
}

impl ApiError {
    /// Whether the failure is an authentication failure (bad credentials or
    /// expired session) rather than a transport problem.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Whether retrying the same request could succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Timeout | Self::Response { status: 429 | 500..=599, .. })
    }

    /// Human-readable message supplied by the server, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } | Self::Response { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
