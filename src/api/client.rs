//! Authenticated HTTP client for the backend.
//!
//! Single point of HTTP egress: base URL and timeout are configured once,
//! every request carries the CSRF header pair and bearer token when
//! present, and session cookies always ride along. Failures are classified
//! into [`ApiError`] variants; a 401 clears the stored token and forces
//! navigation to the login entry point before the call rejects. The client
//! never retries, caches, or deduplicates.

use std::sync::Arc;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::{Navigator, TokenStore, LOGIN_PATH};
use crate::config::{ClientConfig, CsrfToken};
use crate::error::ApiError;

/// Thin wrapper over [`reqwest::Client`] with auth and failure handling.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    csrf: Option<CsrfToken>,
    tokens: Arc<TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        tokens: Arc<TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;

        Ok(Self {
            http,
            base_url,
            csrf: config.csrf.clone(),
            tokens,
            navigator,
        })
    }

    /// Resolve a path against the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid path {path:?}: {e}")))
    }

    /// Resolve a path and append one percent-encoded segment, for routes
    /// like `/loads/by-cartridge/{value}` where the value may contain
    /// spaces or slashes.
    pub(crate) fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url, ApiError> {
        let mut url = self.url(path)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Config("base URL cannot carry path segments".to_string()))?
            .push(segment);
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.execute(self.http.get(url)).await?;
        decode(response).await
    }

    pub async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.execute(self.http.post(url).json(body)).await?;
        decode(response).await
    }

    pub async fn put_json<B, T>(&self, url: Url, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.execute(self.http.put(url).json(body)).await?;
        decode(response).await
    }

    pub async fn delete(&self, url: Url) -> Result<(), ApiError> {
        self.execute(self.http.delete(url)).await.map(|_| ())
    }

    /// Attach auth headers, send, and classify the outcome. One attempt
    /// only; the caller decides whether anything is worth retrying.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let mut request = request;
        if let Some(csrf) = &self.csrf {
            request = request.header(csrf.header.as_str(), csrf.token.as_str());
        }
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(classify_transport)?;
        self.classify_status(response.status())?;
        Ok(response)
    }

    /// Map a response status to an [`ApiError`], performing the observable
    /// side effects of the 401 path.
    pub(crate) fn classify_status(&self, status: StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            return Ok(());
        }
        match status {
            StatusCode::UNAUTHORIZED => {
                // The session is gone; the stale token must not outlive it.
                self.tokens.clear();
                self.navigator.navigate(LOGIN_PATH);
                Err(ApiError::Unauthorized)
            }
            StatusCode::FORBIDDEN => {
                tracing::error!("access forbidden");
                Err(ApiError::Forbidden)
            }
            StatusCode::NOT_FOUND => {
                tracing::error!("resource not found");
                Err(ApiError::NotFound)
            }
            s if s.is_server_error() => {
                tracing::error!(status = s.as_u16(), "server error");
                Err(ApiError::Server { status: s.as_u16() })
            }
            s => {
                tracing::error!(status = s.as_u16(), "unexpected response status");
                Err(ApiError::Unexpected { status: s.as_u16() })
            }
        }
    }
}

/// Distinguish a timeout from a connection that never answered.
fn classify_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        tracing::error!(error = %err, "request timed out");
        ApiError::Timeout
    } else {
        tracing::error!(error = %err, "network failure");
        ApiError::Network(err.to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockNavigator;

    fn client_with(navigator: MockNavigator, tokens: Arc<TokenStore>) -> ApiClient {
        let config = ClientConfig {
            csrf: Some(CsrfToken {
                header: "X-CSRF-TOKEN".to_string(),
                token: "csrf-abc".to_string(),
            }),
            ..ClientConfig::default()
        };
        ApiClient::new(&config, tokens, Arc::new(navigator)).unwrap()
    }

    fn quiet_navigator() -> MockNavigator {
        let mut nav = MockNavigator::new();
        nav.expect_navigate().never();
        nav
    }

    mod url_building {
        use super::*;

        #[test]
        fn test_joins_path_onto_base() {
            let client = client_with(quiet_navigator(), Arc::new(TokenStore::in_memory()));
            let url = client.url("/loads").unwrap();
            assert_eq!(url.as_str(), "http://localhost:8080/loads");
        }

        #[test]
        fn test_segment_is_percent_encoded() {
            let client = client_with(quiet_navigator(), Arc::new(TokenStore::in_memory()));
            let url = client
                .url_with_segment("/loads/by-powder", "H4350 Extreme/2")
                .unwrap();
            assert_eq!(
                url.as_str(),
                "http://localhost:8080/loads/by-powder/H4350%20Extreme%2F2"
            );
        }

        #[test]
        fn test_invalid_base_url_is_config_error() {
            let config = ClientConfig {
                base_url: "not a url".to_string(),
                ..ClientConfig::default()
            };
            let result = ApiClient::new(
                &config,
                Arc::new(TokenStore::in_memory()),
                Arc::new(MockNavigator::new()),
            );
            assert!(matches!(result, Err(ApiError::Config(_))));
        }
    }

    mod status_classification {
        use super::*;

        #[test]
        fn test_success_statuses_pass() {
            let client = client_with(quiet_navigator(), Arc::new(TokenStore::in_memory()));
            assert!(client.classify_status(StatusCode::OK).is_ok());
            assert!(client.classify_status(StatusCode::CREATED).is_ok());
            assert!(client.classify_status(StatusCode::NO_CONTENT).is_ok());
        }

        #[test]
        fn test_401_clears_token_and_navigates_to_login() {
            let tokens = Arc::new(TokenStore::in_memory());
            tokens.set("stale-bearer").unwrap();

            let mut nav = MockNavigator::new();
            nav.expect_navigate()
                .withf(|path| path == LOGIN_PATH)
                .times(1)
                .return_const(());

            let client = client_with(nav, Arc::clone(&tokens));
            let result = client.classify_status(StatusCode::UNAUTHORIZED);

            assert!(matches!(result, Err(ApiError::Unauthorized)));
            assert_eq!(tokens.get(), None);
        }

        #[test]
        fn test_403_is_forbidden_without_navigation() {
            let client = client_with(quiet_navigator(), Arc::new(TokenStore::in_memory()));
            assert!(matches!(
                client.classify_status(StatusCode::FORBIDDEN),
                Err(ApiError::Forbidden)
            ));
        }

        #[test]
        fn test_404_is_not_found() {
            let client = client_with(quiet_navigator(), Arc::new(TokenStore::in_memory()));
            assert!(matches!(
                client.classify_status(StatusCode::NOT_FOUND),
                Err(ApiError::NotFound)
            ));
        }

        #[test]
        fn test_5xx_is_server_error_with_status() {
            let client = client_with(quiet_navigator(), Arc::new(TokenStore::in_memory()));
            match client.classify_status(StatusCode::BAD_GATEWAY) {
                Err(ApiError::Server { status }) => assert_eq!(status, 502),
                other => panic!("expected server error, got {other:?}"),
            }
        }

        #[test]
        fn test_other_client_errors_are_unexpected() {
            let client = client_with(quiet_navigator(), Arc::new(TokenStore::in_memory()));
            match client.classify_status(StatusCode::BAD_REQUEST) {
                Err(ApiError::Unexpected { status }) => assert_eq!(status, 400),
                other => panic!("expected unexpected-status error, got {other:?}"),
            }
        }

        #[test]
        fn test_401_does_not_disturb_other_tokens_paths() {
            // 403 must not clear the token; only 401 invalidates it.
            let tokens = Arc::new(TokenStore::in_memory());
            tokens.set("still-valid").unwrap();
            let client = client_with(quiet_navigator(), Arc::clone(&tokens));
            let _ = client.classify_status(StatusCode::FORBIDDEN);
            assert_eq!(tokens.get(), Some("still-valid".to_string()));
        }
    }
}
