//! Outgoing request configuration.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use crate::error::HttpError;

/// Everything needed to dispatch one request, before it is handed to reqwest.
///
/// Interceptors receive this by value and may mutate any field; the headers in
/// particular are still writable at that point.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: Method,
    /// Path relative to the client's base URL, or an absolute URL.
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestConfig {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, HttpError> {
        let value = serde_json::to_value(body)
            .map_err(|e| HttpError::InvalidRequest(format!("body serialization: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// `scheme://...` or protocol-relative `//...`, where a scheme is a letter
/// followed by letters, digits, `+`, `-` or `.`.
fn is_absolute_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }
    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && rest.starts_with("//")
}

/// Join a request URL onto the base URL.
///
/// Absolute URLs (`scheme://` or protocol-relative `//host`) pass through
/// untouched. Otherwise exactly one `/` separates base and path; an empty
/// path yields the base URL as-is.
pub fn combine_url(base_url: &str, url: &str) -> String {
    if is_absolute_url(url) {
        return url.to_string();
    }
    if url.is_empty() {
        return base_url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}
