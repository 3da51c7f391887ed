//! Network and configuration constants.

/// Base URL used when `VITE_API_URL` is unset or empty (local development).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "VITE_API_URL";

/// Storage key the login flow writes the access token under.
pub const DEFAULT_TOKEN_KEY: &str = "accessToken";
