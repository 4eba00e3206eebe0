//! Auth status endpoint.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::UserInfo;

use super::client::ApiClient;
use super::traits::UserApi;

const USER_ENDPOINT: &str = "/api/user";

/// Production [`UserApi`] implementation over the shared [`ApiClient`].
pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserApi for UserService {
    async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.client.get_json(self.client.url(USER_ENDPOINT)?).await
    }
}
