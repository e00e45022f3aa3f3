//! HTTP helpers for the shop backend.
//!
//! Every request carries the session cookie (`credentials: include`).
//! Non-2xx answers become an [`ApiError`] holding the backend's own
//! `message`/`error` text, or the caller's fallback when the body has none.

use contracts::shared::api_error::ApiError;
use contracts::shared::media;
use contracts::shared::multipart::MultipartFields;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData, RequestCredentials};

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Base URL of the REST API, without a trailing slash.
///
/// Overridden at build time with `SHOP_ADMIN_API_URL`.
pub fn api_base() -> String {
    option_env!("SHOP_ADMIN_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path such as `/product/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Absolute URL of an uploaded image. Relative paths are served next to the
/// API, not under it.
pub fn image_url(path: &str) -> Option<String> {
    let base = api_base();
    media::resolve_image_url(media::asset_origin(&base), path)
}

/// HTTP verbs that carry a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Post,
    Put,
}

impl Verb {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Verb::Post => "POST",
            Verb::Put => "PUT",
        }
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn error_from(response: Response, url: &str, fallback: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body, fallback);
    log::warn!("{} {}: {}", status, url, err);
    err
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    url: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response, url, fallback).await);
    }
    response.json::<T>().await.map_err(|e| {
        log::error!("decode {}: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

async fn expect_ok(response: Response, url: &str, fallback: &str) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(response, url, fallback).await)
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(network)?;
    read_json(response, &url, fallback).await
}

pub async fn send_json<B, T>(verb: Verb, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("{} {}", verb.as_str(), url);
    let response = verb
        .builder(&url)
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to encode request: {}", e)))?
        .send()
        .await
        .map_err(network)?;
    read_json(response, &url, fallback).await
}

/// POST without a body whose answer is ignored beyond its status.
pub async fn post_empty(path: &str, fallback: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(network)?;
    expect_ok(response, &url, fallback).await
}

pub async fn delete(path: &str, fallback: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    let response = Request::delete(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(network)?;
    expect_ok(response, &url, fallback).await
}

/// Multipart body: text fields first, then files under their field name.
pub fn form_data(fields: &MultipartFields, files: &[(&str, File)]) -> Result<FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Decode(format!("{:?}", e));
    let form = FormData::new().map_err(js_err)?;
    for (key, value) in fields.iter() {
        form.append_with_str(key, value).map_err(js_err)?;
    }
    for (key, file) in files {
        form.append_with_blob_and_filename(key, file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form)
}

pub async fn send_multipart<T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    form: FormData,
    fallback: &str,
) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("{} {} (multipart)", verb.as_str(), url);
    let response = verb
        .builder(&url)
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| ApiError::Decode(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(network)?;
    read_json(response, &url, fallback).await
}
