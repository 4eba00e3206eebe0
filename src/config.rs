//! Client configuration.
//!
//! Resolved once at startup and passed by reference to everything that
//! needs it. The legacy in-page fallback user (previously a global object
//! on the host page) is an explicit, injected value here; it is a
//! migration shim, not a source of truth.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::model::UserInfo;

/// Environment variable selecting the backend base URL.
pub const API_URL_ENV: &str = "LOADDEV_API_URL";

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anti-forgery token pair, as published by the host page's
/// `_csrf` / `_csrf_header` meta tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    /// Header name to send the token under (e.g. `X-CSRF-TOKEN`).
    pub header: String,
    /// The token value itself.
    pub token: String,
}

/// Configuration for the API client and auth session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// CSRF pair attached to every request when present.
    pub csrf: Option<CsrfToken>,
    /// Legacy fallback consulted when the auth status endpoint fails or
    /// reports unauthenticated.
    pub fallback_user: Option<UserInfo>,
    /// Where the bearer token is persisted. `None` keeps it in memory only.
    pub token_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Resolve configuration from the environment: base URL from
    /// [`API_URL_ENV`] with a localhost default, the fixed timeout, and the
    /// platform config dir for the persisted token.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Default location of the persisted bearer token.
    pub fn default_token_path() -> Option<PathBuf> {
        ProjectDirs::from("ca", "loaddev", "loaddev-client")
            .map(|dirs| dirs.config_dir().join("token"))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            csrf: None,
            fallback_user: None,
            token_path: Self::default_token_path(),
        }
    }
}
