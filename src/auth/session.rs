//! Authenticated/unauthenticated session state.
//!
//! An explicitly constructed session object handed by reference to every
//! consumer that needs it. It owns no rendering; it only tracks who is
//! signed in and drives the login/logout navigation.

use std::sync::Arc;

use crate::api::UserApi;
use crate::model::UserInfo;

use super::navigator::{Navigator, LOGIN_PATH, LOGOUT_PATH};

/// Auth session over the backend's auth status endpoint.
pub struct AuthSession {
    api: Arc<dyn UserApi>,
    navigator: Arc<dyn Navigator>,
    /// Legacy fallback user. Consulted only when the status endpoint fails
    /// or reports unauthenticated; a migration shim, not a source of truth.
    fallback_user: Option<UserInfo>,
    user: Option<UserInfo>,
}

impl AuthSession {
    /// Create a session without checking the backend yet.
    pub fn new(
        api: Arc<dyn UserApi>,
        navigator: Arc<dyn Navigator>,
        fallback_user: Option<UserInfo>,
    ) -> Self {
        Self {
            api,
            navigator,
            fallback_user,
            user: None,
        }
    }

    /// Create a session and run the initial auth check.
    pub async fn init(
        api: Arc<dyn UserApi>,
        navigator: Arc<dyn Navigator>,
        fallback_user: Option<UserInfo>,
    ) -> Self {
        let mut session = Self::new(api, navigator, fallback_user);
        session.refresh().await;
        session
    }

    /// Re-run the auth check against `GET /api/user`. A failed check is not
    /// an error for the caller; the session just ends up unauthenticated
    /// (or on the fallback user).
    pub async fn refresh(&mut self) {
        match self.api.current_user().await {
            Ok(info) if info.authenticated => self.user = Some(info),
            Ok(_) => self.user = self.fallback(),
            Err(err) => {
                tracing::warn!(error = %err, "auth check failed, consulting fallback");
                self.user = self.fallback();
            }
        }
    }

    pub fn authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.username.as_deref())
    }

    /// Send the host to the login entry point. Session state is untouched;
    /// the next [`refresh`](Self::refresh) picks up the result.
    pub fn login(&self) {
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Drop the local user state and send the host to the logout entry
    /// point.
    pub fn logout(&mut self) {
        self.user = None;
        self.navigator.navigate(LOGOUT_PATH);
    }

    fn fallback(&self) -> Option<UserInfo> {
        self.fallback_user
            .clone()
            .filter(|user| user.authenticated)
    }
}
