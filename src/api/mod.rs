//! API access layer: the authenticated HTTP client, the trait seams used
//! for mocking, and the typed services over the backend's REST endpoints.

mod client;
mod loads;
mod traits;
mod users;

pub use client::ApiClient;
pub use loads::{LoadQuery, LoadService};
pub use traits::{LoadApi, UserApi};
pub use users::UserService;

#[cfg(test)]
pub use traits::{MockLoadApi, MockUserApi};
