//! Trait abstractions over the backend API to enable mocking in tests.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{Load, LoadPage, NewLoad, UserInfo};

use super::loads::LoadQuery;

/// Operations on load records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoadApi: Send + Sync {
    /// Fetch one page of loads with sorting and optional search.
    async fn get_loads(&self, query: LoadQuery) -> Result<LoadPage, ApiError>;

    /// Fetch a single load by id.
    async fn get_load(&self, id: i64) -> Result<Load, ApiError>;

    /// Create a new load and return the created record.
    async fn create_load(&self, load: NewLoad) -> Result<Load, ApiError>;

    /// Update an existing load and return the updated record.
    async fn update_load(&self, id: i64, load: NewLoad) -> Result<Load, ApiError>;

    /// Delete a load.
    async fn delete_load(&self, id: i64) -> Result<(), ApiError>;

    /// All loads for one cartridge.
    async fn loads_by_cartridge(&self, cartridge: &str) -> Result<Vec<Load>, ApiError>;

    /// All loads for one bullet.
    async fn loads_by_bullet(&self, bullet: &str) -> Result<Vec<Load>, ApiError>;

    /// All loads for one powder.
    async fn loads_by_powder(&self, powder: &str) -> Result<Vec<Load>, ApiError>;
}

/// Auth status endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Current session status from `GET /api/user`.
    async fn current_user(&self) -> Result<UserInfo, ApiError>;
}
