//! loaddev-client - client core for the load development UI
//!
//! The reusable pieces behind the pages that manage ammunition load
//! records: a form validation/sanitization engine and an authenticated
//! API access layer over the REST backend. Page rendering, routing and
//! notifications live in the consuming shell, not here.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//! use loaddev_client::{
//!     api::{ApiClient, LoadService, UserService},
//!     auth::{AuthSession, TokenStore, TracingNavigator},
//!     config::ClientConfig,
//! };
//!
//! # async fn wire() -> Result<(), loaddev_client::error::ApiError> {
//! let config = ClientConfig::from_env();
//! let tokens = Arc::new(TokenStore::new(config.token_path.clone()));
//! let navigator = Arc::new(TracingNavigator);
//!
//! let client = Arc::new(ApiClient::new(&config, tokens, navigator.clone())?);
//! let _loads = LoadService::new(client.clone());
//! let _session = AuthSession::init(
//!     Arc::new(UserService::new(client)),
//!     navigator,
//!     config.fallback_user.clone(),
//! )
//! .await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod validate;

pub use api::{ApiClient, LoadApi, LoadQuery, LoadService, UserApi, UserService};
pub use auth::{AuthSession, Navigator, TokenStore};
pub use config::{ClientConfig, CsrfToken};
pub use error::ApiError;
pub use model::{Load, LoadPage, NewLoad, UserInfo};
pub use validate::{FieldState, FormValidation, RuleSet};
