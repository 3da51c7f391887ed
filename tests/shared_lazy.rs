//! The shared client is built from the environment on first use, and a later
//! `init` cannot replace it.
//!
//! Lives in its own test binary because it mutates the process environment
//! and process-global state.

use std::env;

use secure_vault_client::global;
use secure_vault_client::prelude::*;

#[test]
fn shared_builds_from_env_then_rejects_init() {
    env::set_var("VITE_API_URL", "https://lazy.example.com");
    assert!(global::try_shared().is_none());

    let shared = global::shared().expect("shared client builds from env");
    assert_eq!(shared.base_url(), "https://lazy.example.com");
    assert_eq!(shared.token_storage_key(), DEFAULT_TOKEN_KEY);
    assert!(std::ptr::eq(global::shared().unwrap(), shared));

    let replacement = ApiClient::builder()
        .base_url("https://replacement.example.com")
        .build()
        .unwrap();
    assert!(matches!(
        global::init(replacement),
        Err(SdkError::AlreadyInitialized)
    ));

    // Construction happened once; later env changes do not leak in.
    env::set_var("VITE_API_URL", "https://changed.example.com");
    assert_eq!(global::shared().unwrap().base_url(), "https://lazy.example.com");
}
