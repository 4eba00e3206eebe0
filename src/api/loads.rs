//! Typed CRUD operations over the `/loads` endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;

use crate::error::ApiError;
use crate::model::{Load, LoadPage, NewLoad};

use super::client::ApiClient;
use super::traits::LoadApi;

const LOADS_ENDPOINT: &str = "/loads";

/// Paging, sorting and search parameters for the load list.
///
/// The default matches the list view's initial state: first page of ten,
/// newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: String,
    /// Free-text search; blank or whitespace-only is not sent at all.
    pub search: Option<String>,
}

impl Default for LoadQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "createdAt".to_string(),
            sort_dir: "desc".to_string(),
            search: None,
        }
    }
}

impl LoadQuery {
    /// Query pairs in wire order. The search term is trimmed and omitted
    /// entirely when blank.
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortDir", self.sort_dir.clone()),
        ];
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        params
    }
}

/// Production [`LoadApi`] implementation over the shared [`ApiClient`].
pub struct LoadService {
    client: Arc<ApiClient>,
}

impl LoadService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn list_url(&self, query: &LoadQuery) -> Result<Url, ApiError> {
        let mut url = self.client.url(LOADS_ENDPOINT)?;
        for (name, value) in query.params() {
            url.query_pairs_mut().append_pair(name, &value);
        }
        Ok(url)
    }

    fn load_url(&self, id: i64) -> Result<Url, ApiError> {
        self.client.url(&format!("{LOADS_ENDPOINT}/{id}"))
    }

    fn filter_url(&self, filter: &str, value: &str) -> Result<Url, ApiError> {
        self.client
            .url_with_segment(&format!("{LOADS_ENDPOINT}/{filter}"), value)
    }
}

#[async_trait]
impl LoadApi for LoadService {
    async fn get_loads(&self, query: LoadQuery) -> Result<LoadPage, ApiError> {
        self.client.get_json(self.list_url(&query)?).await
    }

    async fn get_load(&self, id: i64) -> Result<Load, ApiError> {
        self.client.get_json(self.load_url(id)?).await
    }

    async fn create_load(&self, load: NewLoad) -> Result<Load, ApiError> {
        let url = self.client.url(LOADS_ENDPOINT)?;
        self.client.post_json(url, &load).await
    }

    async fn update_load(&self, id: i64, load: NewLoad) -> Result<Load, ApiError> {
        self.client.put_json(self.load_url(id)?, &load).await
    }

    async fn delete_load(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(self.load_url(id)?).await
    }

    async fn loads_by_cartridge(&self, cartridge: &str) -> Result<Vec<Load>, ApiError> {
        self.client
            .get_json(self.filter_url("by-cartridge", cartridge)?)
            .await
    }

    async fn loads_by_bullet(&self, bullet: &str) -> Result<Vec<Load>, ApiError> {
        self.client
            .get_json(self.filter_url("by-bullet", bullet)?)
            .await
    }

    async fn loads_by_powder(&self, powder: &str) -> Result<Vec<Load>, ApiError> {
        self.client
            .get_json(self.filter_url("by-powder", powder)?)
            .await
    }
}
