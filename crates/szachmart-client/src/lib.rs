//! # szachmart-client
//!
//! Typed request/response wrappers over the shop backend's REST contract.
//! One module per backend resource; every wrapper is a thin mapper with no
//! retries — each call is attempted once and failures surface immediately.

pub mod auth;
pub mod categories;
pub mod comments;
pub mod orders;
pub mod password;
pub mod products;
pub mod slider;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use szachmart_auth::store::TokenStore;
use szachmart_core::config::api::ApiConfig;
use szachmart_core::error::{AppError, ErrorKind};

/// HTTP client for the shop backend.
///
/// Holds the base URL, the underlying connection pool, and a shared handle
/// to the token slot. Every request attaches `Authorization: Bearer <token>`
/// when a token is stored, so role-gated endpoints work without the caller
/// threading the token through.
#[derive(Clone)]
pub struct ApiClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Base URL including the `/api` prefix, without a trailing slash.
    base_url: String,
    /// The token slot consulted for the bearer header.
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Creates a client from API configuration and a token slot.
    pub fn new(config: &ApiConfig, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// The token slot this client consults.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Joins a path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a request with the bearer header attached when a token exists.
    ///
    /// A slot read failure is logged and treated as no-token; the request
    /// still goes out unauthenticated and the backend decides.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.store.load() {
            Ok(Some(token)) => builder.bearer_auth(token),
            Ok(None) => builder,
            Err(e) => {
                warn!(error = %e, "Failed to read token slot, sending unauthenticated");
                builder
            }
        }
    }

    /// Sends a request and maps transport and status failures into
    /// [`AppError`].
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("Backend responded with {status}")
        } else {
            format!("Backend responded with {status}: {body}")
        };

        let kind = match status.as_u16() {
            401 | 403 => ErrorKind::Authorization,
            404 => ErrorKind::NotFound,
            _ => ErrorKind::Api,
        };
        Err(AppError::new(kind, message))
    }

    /// GET `path` and deserialize the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(self.request(reqwest::Method::GET, path)).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use szachmart_auth::store::MemoryTokenStore;

    fn client(base_url: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        };
        ApiClient::new(&config, Arc::new(MemoryTokenStore::new())).unwrap()
    }

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let c = client("http://localhost:8080/api/");
        assert_eq!(c.url("/products"), "http://localhost:8080/api/products");
        let c = client("http://localhost:8080/api");
        assert_eq!(c.url("/products/7"), "http://localhost:8080/api/products/7");
    }

    #[tokio::test]
    async fn test_connection_failure_maps_to_network_kind() {
        // Bind then immediately drop a listener so the port is known closed
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let c = client(&format!("http://127.0.0.1:{port}/api"));
        let err = c.list_products().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
    }
}
