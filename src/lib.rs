//! # Secure Vault Client
//!
//! The configured HTTP client for the Secure PII Service, for both native and
//! WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Constants, configuration, error types (always available, WASM-safe)
//! 2. **Storage**: Persistent key-value store the access token lives in
//! 3. **HTTP**: `RequestConfig`, interceptor chain, dispatch
//! 4. **Auth**: `BearerAuth`, which stamps `Authorization: Bearer <token>`
//! 5. **Client**: `ApiClient`, plus the process-wide shared instance
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use secure_vault_client::prelude::*;
//!
//! // Base URL from VITE_API_URL, falling back to http://localhost:8000.
//! let client = secure_vault_client::global::shared()?;
//!
//! // After login, the auth flow stores the token...
//! client.storage().set_item("accessToken", &token)?;
//!
//! // ...and every request from then on carries it.
//! let items: Vec<VaultItem> = client.get("/api/vault").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified error types.
pub mod error;

/// URL, env var, and storage key constants.
pub mod network;

/// Environment sources and base URL resolution.
pub mod config;

// ── Layer 2: Storage ─────────────────────────────────────────────────────────

/// Token storage backends.
pub mod storage;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Request configuration, interceptors, dispatch.
pub mod http;

// ── Layer 4: Auth ────────────────────────────────────────────────────────────

/// Bearer token interceptor.
pub mod auth;

// ── Layer 5: Client ──────────────────────────────────────────────────────────

/// The primary entry point, `ApiClient`.
pub mod client;

/// The one shared `ApiClient` per process.
pub mod global;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{HttpError, SdkError, StorageError};

    // Configuration
    pub use crate::config::{resolve_base_url, ClientConfig, EnvSource};
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TOKEN_KEY};

    // Storage
    pub use crate::storage::{MemoryStorage, TokenStorage};
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::storage::FileStorage;
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    pub use crate::storage::LocalStorage;

    // HTTP + auth
    pub use crate::auth::BearerAuth;
    pub use crate::http::{RequestConfig, RequestInterceptor};

    // Client
    pub use crate::client::{ApiClient, ApiClientBuilder};
}
