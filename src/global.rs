//! The process-wide shared client.
//!
//! One [`ApiClient`] per process, constructed exactly once:
//!
//! - Call [`init`] at startup to install a client built however the
//!   application likes (custom storage, extra interceptors, ...).
//! - Otherwise the first call to [`shared`] builds one from
//!   [`ClientConfig::from_env`](crate::config::ClientConfig::from_env).
//!
//! Once installed, the instance lives until the process exits and is never
//! replaced. Code that prefers explicit wiring can ignore this module and pass
//! an `ApiClient` around directly.

use once_cell::sync::OnceCell;

use crate::client::ApiClient;
use crate::error::SdkError;

static SHARED: OnceCell<ApiClient> = OnceCell::new();

/// Install the shared client. Fails with [`SdkError::AlreadyInitialized`] if
/// one is already installed, including one lazily created by [`shared`].
pub fn init(client: ApiClient) -> Result<&'static ApiClient, SdkError> {
    let mut installed = false;
    let shared = SHARED.get_or_init(|| {
        installed = true;
        client
    });
    if !installed {
        tracing::warn!("Shared API client already initialized");
        return Err(SdkError::AlreadyInitialized);
    }
    tracing::debug!(base_url = %shared.base_url(), "Installed shared API client");
    Ok(shared)
}

/// The shared client, built from the ambient environment on first use.
pub fn shared() -> Result<&'static ApiClient, SdkError> {
    SHARED.get_or_try_init(ApiClient::from_env)
}

/// The shared client if one has been installed or created.
pub fn try_shared() -> Option<&'static ApiClient> {
    SHARED.get()
}
