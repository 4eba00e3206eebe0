//! Navigation seam for auth-driven redirects.

/// Login entry point the client is sent to on a 401.
pub const LOGIN_PATH: &str = "/login";

/// Logout entry point.
pub const LOGOUT_PATH: &str = "/logout";

/// Forced-navigation seam.
///
/// The hosting shell (browser page, TUI router) supplies the real
/// implementation; the API client only ever asks to go somewhere, it never
/// renders anything itself.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Navigate the host away from the current view.
    fn navigate(&self, path: &str);
}

/// Default navigator for headless consumers: records the redirect in the
/// log and nothing else.
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigation requested");
    }
}
