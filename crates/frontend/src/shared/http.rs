//! JSON envelope client over `gloo-net`
//!
//! Every call resolves to the decoded envelope payload or an [`ApiError`].
//! No retries and no timeouts beyond the browser's fetch defaults.

use super::api_utils::api_url;
use contracts::shared::api::{decode_envelope, ApiError, ApiPayload};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<ApiPayload<T>, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    decode_envelope(ok, status, &body)
}

async fn send_empty<T: DeserializeOwned>(
    method: &str,
    path: &str,
    builder: RequestBuilder,
) -> Result<ApiPayload<T>, ApiError> {
    log::debug!("{} {}", method, path);
    let response = builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport)?;
    read(response).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<ApiPayload<T>, ApiError> {
    log::debug!("{} {}", method, path);
    let request: Request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request.send().await.map_err(transport)?;
    read(response).await
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<ApiPayload<T>, ApiError> {
    send_empty("GET", path, Request::get(&api_url(path))).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<ApiPayload<T>, ApiError> {
    send_empty("DELETE", path, Request::delete(&api_url(path))).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiPayload<T>, ApiError> {
    send_json("POST", path, Request::post(&api_url(path)), body).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiPayload<T>, ApiError> {
    send_json("PUT", path, Request::put(&api_url(path)), body).await
}
