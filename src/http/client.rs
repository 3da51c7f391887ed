//! Low-level dispatch: turns a finished [`RequestConfig`] into a reqwest call
//! and maps the response status onto [`HttpError`].

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::HttpError;
use crate::http::request::combine_url;
use crate::http::RequestConfig;

/// Send `config` against `base_url`. Non-2xx statuses become errors.
pub(crate) async fn dispatch(
    client: &Client,
    base_url: &str,
    config: RequestConfig,
) -> Result<Response, HttpError> {
    let url = combine_url(base_url, &config.url);
    tracing::debug!(method = %config.method, url = %url, "Dispatching request");

    let mut req = client
        .request(config.method, &url)
        .headers(config.headers);
    if !config.query.is_empty() {
        req = req.query(&config.query);
    }
    if let Some(body) = config.body {
        req = req.json(&body);
    }

    let resp = req.send().await?;
    check_status(resp).await
}

async fn check_status(resp: Response) -> Result<Response, HttpError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let status_code = status.as_u16();
    let body_text = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status_code, "Request failed");

    Err(match status_code {
        401 => HttpError::Unauthorized(body_text),
        403 => HttpError::Forbidden(body_text),
        404 => HttpError::NotFound(body_text),
        400..=499 => HttpError::BadRequest {
            status: status_code,
            body: body_text,
        },
        _ => HttpError::ServerError {
            status: status_code,
            body: body_text,
        },
    })
}

/// Decode a JSON body. An empty body decodes as JSON `null`, so `()` and
/// `Option<T>` work for `204 No Content`.
pub(crate) async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, HttpError> {
    let bytes = resp.bytes().await?;
    if bytes.is_empty() {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}
