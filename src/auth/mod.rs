//! Authentication: session state, persisted bearer token, and the
//! navigation seam used for forced redirects to the login entry point.

mod navigator;
mod session;
mod token;

pub use navigator::{Navigator, TracingNavigator, LOGIN_PATH, LOGOUT_PATH};
pub use session::AuthSession;
pub use token::TokenStore;

#[cfg(test)]
pub use navigator::MockNavigator;
