//! Error taxonomy for the API client.
//!
//! Validation errors are never represented here; validators return their
//! messages as data. Everything that can go wrong talking to the backend
//! maps onto one [`ApiError`] variant, and each page-level caller decides
//! how to surface it.

/// Classified failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401. The stored bearer token has been cleared and the navigator was
    /// sent to the login entry point before this error was returned.
    #[error("Unauthorized")]
    Unauthorized,

    /// 403. Caller renders an access-denied state.
    #[error("Access forbidden")]
    Forbidden,

    /// 404. Caller renders a not-found state.
    #[error("Not found")]
    NotFound,

    /// 5xx. Caller renders a generic retryable failure.
    #[error("Server error: {status}")]
    Server { status: u16 },

    /// No response within the configured window.
    #[error("Request timed out")]
    Timeout,

    /// No response at all; distinct from a timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded as the expected type.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Any other non-success status the caller did not expect.
    #[error("Unexpected status: {status}")]
    Unexpected { status: u16 },

    /// The client itself could not be constructed or a URL was invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether a retry of the same call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Server { .. } | ApiError::Timeout | ApiError::Network(_)
        )
    }
}
