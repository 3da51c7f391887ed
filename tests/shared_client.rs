//! The process-wide client is installed once and never replaced.
//!
//! Lives in its own test binary because it mutates process-global state.

use std::sync::Arc;

use secure_vault_client::global;
use secure_vault_client::prelude::*;

#[test]
fn shared_client_installs_exactly_once() {
    assert!(global::try_shared().is_none());

    let first = ApiClient::builder()
        .base_url("https://first.example.com")
        .storage(Arc::new(MemoryStorage::new()))
        .build()
        .unwrap();
    let installed = global::init(first).expect("first init succeeds");
    assert_eq!(installed.base_url(), "https://first.example.com");

    let second = ApiClient::builder()
        .base_url("https://second.example.com")
        .build()
        .unwrap();
    assert!(matches!(
        global::init(second),
        Err(SdkError::AlreadyInitialized)
    ));

    let shared = global::shared().unwrap();
    assert_eq!(shared.base_url(), "https://first.example.com");
    assert!(std::ptr::eq(shared, installed));

    shared.storage().set_item("accessToken", "abc123").unwrap();
    let config = global::try_shared()
        .unwrap()
        .prepare(RequestConfig::new(reqwest::Method::GET, "/api/vault"))
        .unwrap();
    assert_eq!(config.headers[reqwest::header::AUTHORIZATION], "Bearer abc123");
}
