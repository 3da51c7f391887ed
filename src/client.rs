//! High-level client: `ApiClient` and its builder.
//!
//! Every request follows the same path:
//!
//! 1. The caller's [`RequestConfig`] is built (body serialization can fail here).
//! 2. The interceptor chain runs: any extra interceptors registered on the
//!    builder, then [`BearerAuth`], which always runs last.
//! 3. The finished config is joined onto the base URL and dispatched.

use std::fmt;
use std::sync::Arc;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::BearerAuth;
use crate::config::ClientConfig;
use crate::error::{HttpError, SdkError};
use crate::http::client::{decode_json, dispatch};
use crate::http::request::combine_url;
use crate::http::{InterceptorChain, RequestConfig, RequestInterceptor};
use crate::storage::{default_storage, TokenStorage};

/// HTTP client bound to one backend, authenticating from persistent storage.
///
/// Cheap to clone; clones share the connection pool, storage, and interceptors.
pub struct ApiClient {
    base_url: String,
    http: Client,
    storage: Arc<dyn TokenStorage>,
    auth: BearerAuth,
    interceptors: InterceptorChain,
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Build with the ambient environment and the platform's default storage.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::builder().config(ClientConfig::from_env()).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The storage the access token is read from. The login flow writes here.
    pub fn storage(&self) -> &Arc<dyn TokenStorage> {
        &self.storage
    }

    pub fn token_storage_key(&self) -> &str {
        self.auth.key()
    }

    // ── Request pipeline ─────────────────────────────────────────────────

    /// Run `config` through the interceptor chain and resolve its URL against
    /// the base URL, without sending anything.
    pub fn prepare(&self, config: RequestConfig) -> Result<RequestConfig, HttpError> {
        self.intercept(Ok(config)).map(|mut config| {
            config.url = combine_url(&self.base_url, &config.url);
            config
        })
    }

    /// Send a request and return the raw response. Non-2xx statuses are errors.
    pub async fn send(&self, config: RequestConfig) -> Result<Response, HttpError> {
        self.execute(Ok(config)).await
    }

    fn intercept(
        &self,
        input: Result<RequestConfig, HttpError>,
    ) -> Result<RequestConfig, HttpError> {
        self.interceptors.apply(input)
    }

    async fn execute(
        &self,
        input: Result<RequestConfig, HttpError>,
    ) -> Result<Response, HttpError> {
        let config = self.intercept(input)?;
        dispatch(&self.http, &self.base_url, config).await
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        input: Result<RequestConfig, HttpError>,
    ) -> Result<T, HttpError> {
        let resp = self.execute(input).await?;
        decode_json(resp).await
    }

    // ── Convenience methods ──────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.execute_json(Ok(RequestConfig::new(Method::GET, path)))
            .await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        let config = query
            .iter()
            .fold(RequestConfig::new(Method::GET, path), |config, (k, v)| {
                config.query(*k, *v)
            });
        self.execute_json(Ok(config)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute_json(RequestConfig::new(Method::POST, path).json(body))
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute_json(RequestConfig::new(Method::PUT, path).json(body))
            .await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute_json(RequestConfig::new(Method::PATCH, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.execute_json(Ok(RequestConfig::new(Method::DELETE, path)))
            .await
    }
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: self.http.clone(),
            storage: self.storage.clone(),
            auth: self.auth.clone(),
            interceptors: self.interceptors.clone(),
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .field("interceptors", &self.interceptors)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ApiClientBuilder {
    config: ClientConfig,
    storage: Option<Arc<dyn TokenStorage>>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            config: ClientConfig::default(),
            storage: None,
            interceptors: Vec::new(),
        }
    }
}

impl ApiClientBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn token_storage_key(mut self, key: &str) -> Self {
        self.config.token_storage_key = key.to_string();
        self
    }

    /// Storage backend for the access token. Defaults to `localStorage` on
    /// WASM and an in-memory store on native.
    pub fn storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Register an interceptor. Runs before the bearer-token interceptor, in
    /// registration order.
    pub fn interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Result<ApiClient, SdkError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.pool_max_idle_per_host(10);
        }
        let http = builder.build().map_err(HttpError::from)?;

        let storage = self.storage.unwrap_or_else(default_storage);
        let auth = BearerAuth::new(storage.clone(), self.config.token_storage_key);

        let mut interceptors = InterceptorChain::new();
        for interceptor in self.interceptors {
            interceptors.push(interceptor);
        }
        interceptors.push(Arc::new(auth.clone()));

        tracing::debug!(
            base_url = %self.config.base_url,
            interceptors = interceptors.len(),
            "Built API client"
        );

        Ok(ApiClient {
            base_url: self.config.base_url,
            http,
            storage,
            auth,
            interceptors,
        })
    }
}
