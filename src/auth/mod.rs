//! Authentication: bearer token injection.
//!
//! ## Token lifecycle
//!
//! - The login flow (outside this crate) writes the access token into
//!   [`TokenStorage`] under the configured key, and removes it on logout.
//! - [`BearerAuth`] reads that key on **every** request. Nothing is cached, so
//!   a login or logout takes effect on the very next request.
//! - The token value is never logged.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::error::HttpError;
use crate::http::{RequestConfig, RequestInterceptor};
use crate::storage::TokenStorage;

/// Request interceptor setting `Authorization: Bearer <token>` from storage.
#[derive(Clone)]
pub struct BearerAuth {
    storage: Arc<dyn TokenStorage>,
    key: String,
}

impl BearerAuth {
    pub fn new(storage: Arc<dyn TokenStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Storage key the token is read from.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The token as stored right now. Empty values count as absent.
    pub fn current_token(&self) -> Option<String> {
        self.storage
            .get_item(&self.key)
            .filter(|token| !token.is_empty())
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, mut config: RequestConfig) -> Result<RequestConfig, HttpError> {
        let Some(token) = self.current_token() else {
            tracing::trace!(url = %config.url, "No access token stored");
            return Ok(config);
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| HttpError::InvalidAuthToken)?;
        value.set_sensitive(true);
        config.headers.insert(AUTHORIZATION, value);

        tracing::trace!(url = %config.url, "Attached bearer token");
        Ok(config)
    }

    fn on_error(&self, error: HttpError) -> Result<RequestConfig, HttpError> {
        Err(error)
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth").field("key", &self.key).finish()
    }
}
