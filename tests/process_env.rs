//! `ProcessEnv` reads process variables and a `.env` file from the working
//! directory, with process values taking precedence.
//!
//! Lives in its own test binary because it changes the working directory and
//! the process environment, and `.env` is only loaded once per process.

#![cfg(feature = "native")]

use std::env;
use std::fs;

use secure_vault_client::config::ProcessEnv;
use secure_vault_client::prelude::*;

#[test]
fn process_env_reads_dotenv_with_process_precedence() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".env"),
        "VITE_API_URL=https://dotenv.example.com\nVAULT_TEST_PRECEDENCE=from-dotenv\n",
    )
    .unwrap();

    env::remove_var("VITE_API_URL");
    env::set_var("VAULT_TEST_PRECEDENCE", "from-process");
    env::set_current_dir(dir.path()).unwrap();

    let process_env = ProcessEnv::load();
    assert_eq!(resolve_base_url(&process_env), "https://dotenv.example.com");
    assert_eq!(ClientConfig::from_env().base_url, "https://dotenv.example.com");
    assert_eq!(
        process_env.var("VAULT_TEST_PRECEDENCE").as_deref(),
        Some("from-process")
    );

    env::set_var("VITE_API_URL", "https://process.example.com");
    assert_eq!(resolve_base_url(&process_env), "https://process.example.com");

    env::set_var("VITE_API_URL", "");
    assert_eq!(resolve_base_url(&process_env), DEFAULT_API_URL);

    env::remove_var("VITE_API_URL");
    assert_eq!(resolve_base_url(&process_env), "http://localhost:8000");
}
