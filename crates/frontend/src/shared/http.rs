//! Authorized requests to the society API.
//!
//! Every request carries the bearer token of the stored session, if there is
//! one. Errors are plain strings shown in the page banners.

use contracts::system::session::SessionStore;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;
use crate::system::auth::storage::LocalStorageSessionStore;

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match LocalStorageSessionStore.load() {
        Ok(Some(session)) if !session.token.is_empty() => {
            builder.header("Authorization", &session.bearer_header())
        }
        Ok(_) => builder,
        Err(e) => {
            log::warn!("session unavailable, sending request without token: {}", e);
            builder
        }
    }
}

/// Текст ошибки для баннера: тело ответа, если сервер его прислал
pub fn status_error(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed: {}", status)
    } else {
        format!("Request failed ({}): {}", status, body)
    }
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, String> {
    let request = request.map_err(|e| format!("Failed to serialize request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(authorized(Request::get(&api_url(path))).build()).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Response, String> {
    send(authorized(Request::post(&api_url(path))).json(body)).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<Response, String> {
    send(authorized(Request::put(&api_url(path))).json(body)).await
}

/// PUT без тела, параметры в query string
pub async fn put_query(path: &str, query: &[(&str, &str)]) -> Result<Response, String> {
    let builder = Request::put(&api_url(path)).query(query.iter().copied());
    send(authorized(builder).build()).await
}
