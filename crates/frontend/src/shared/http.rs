//! Authorized JSON helpers over gloo-net.
//!
//! Every call reads the bearer token from localStorage (the backend is
//! the only source of truth; there is no client-side session cache) and
//! decodes the backend's `{ "message": ... }` error envelope into the
//! `Err` string shown to the admin.

use contracts::system::auth::ApiMessage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = authorized(Request::get(&api_url(path)))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    decode(resp).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let resp = authorized(Request::post(&api_url(path)))?
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    decode(resp).await
}

/// POST with no request body (e.g. quote approval).
pub async fn post_empty(path: &str) -> Result<(), String> {
    let resp = authorized(Request::post(&api_url(path)))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let resp = authorized(Request::patch(&api_url(path)))?
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    decode(resp).await
}

/// PATCH with no request body (e.g. order completion).
pub async fn patch_empty(path: &str) -> Result<(), String> {
    let resp = authorized(Request::patch(&api_url(path)))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let resp = authorized(Request::delete(&api_url(path)))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await
}

/// DELETE carrying a JSON body (admin bid cancellation).
pub async fn delete_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let resp = authorized(Request::delete(&api_url(path)))?
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    check(resp).await
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, String> {
    let token = storage::get_token().ok_or_else(|| "Not authenticated".to_string())?;
    Ok(builder.header("Authorization", &format!("Bearer {token}")))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

async fn check(resp: Response) -> Result<(), String> {
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    Ok(())
}

async fn error_message(resp: Response) -> String {
    let status = resp.status();
    let url = resp.url();
    let message = match resp.json::<ApiMessage>().await {
        Ok(envelope) if !envelope.message.is_empty() => envelope.message,
        _ => format!("Request failed: HTTP {status}"),
    };
    log::error!("{url} -> {status}: {message}");
    message
}
