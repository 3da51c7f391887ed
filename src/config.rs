//! Client configuration resolved from the environment.
//!
//! Environment access goes through [`EnvSource`] so resolution can be tested
//! against arbitrary environments without touching the real process env.
//!
//! - **Native**: [`ProcessEnv`] reads process variables, after loading a `.env`
//!   file from the working directory if one exists (process values win).
//! - **WASM**: [`BuildEnv`] returns the values captured at compile time, the
//!   same way the bundler inlines `VITE_*` variables into the bundle.

use std::collections::HashMap;

use crate::network::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TOKEN_KEY};

/// A read-only view of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

/// Process environment, with `.env` loaded on first construction.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

#[cfg(not(target_arch = "wasm32"))]
impl ProcessEnv {
    pub fn load() -> Self {
        #[cfg(feature = "native")]
        {
            static DOTENV: once_cell::sync::OnceCell<()> = once_cell::sync::OnceCell::new();
            DOTENV.get_or_init(|| match dotenvy::dotenv() {
                Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
                Err(e) if e.not_found() => {}
                Err(e) => tracing::warn!(error = %e, "Failed to load .env file"),
            });
        }
        ProcessEnv
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Variables captured when the crate was compiled.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildEnv;

impl EnvSource for BuildEnv {
    fn var(&self, key: &str) -> Option<String> {
        match key {
            API_URL_ENV => option_env!("VITE_API_URL").map(str::to_string),
            _ => None,
        }
    }
}

/// Resolve the backend base URL.
///
/// Returns the value of `VITE_API_URL` when it is set and non-empty, otherwise
/// [`DEFAULT_API_URL`].
pub fn resolve_base_url(env: &impl EnvSource) -> String {
    env.var(API_URL_ENV)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Construction-time settings for [`ApiClient`](crate::client::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root prefixed to every relative request path. Immutable once the
    /// client is built.
    pub base_url: String,
    /// Storage key the bearer token is read from on each request.
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_source(env: &impl EnvSource) -> Self {
        Self {
            base_url: resolve_base_url(env),
            ..Self::default()
        }
    }

    /// Resolve from the platform's ambient environment.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let config = Self::from_source(&ProcessEnv::load());
        #[cfg(target_arch = "wasm32")]
        let config = Self::from_source(&BuildEnv);

        tracing::debug!(base_url = %config.base_url, "Resolved client configuration");
        config
    }
}
