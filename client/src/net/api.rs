//! REST helpers for the school backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since the backend
//! is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Transport failures map to
//! `Network`, non-2xx responses to `Server`/`Status` via
//! [`ApiError::from_response`], and unexpected payloads to `Decode`. A
//! protected call with no stored token returns `Unauthenticated` without
//! touching the network. There is no retry, caching, or cancellation here;
//! screens decide what to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::ApiError;
use records::endpoints::{self, Resource};
use records::types::{AuthTokens, BulkDeleteResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Login and register are the only calls made without a session.
fn requires_session(path: &str) -> bool {
    let route = path.split('?').next().unwrap_or(path);
    route != endpoints::LOGIN && route != endpoints::REGISTER
}

/// `Authorization` value for a call. Protected calls without a stored token
/// fail here instead of reaching the backend.
fn authorization(path: &str, token: Option<String>) -> Result<Option<String>, ApiError> {
    match token.filter(|t| !t.trim().is_empty()) {
        Some(token) => Ok(Some(bearer_header(&token))),
        None if requires_session(path) => Err(ApiError::Unauthenticated),
        None => Ok(None),
    }
}

/// Decode a successful response body; an empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Serialize)]
struct BulkDeleteRequest<'a> {
    ids: &'a [String],
}

/// Issue one request and return the raw body of a 2xx response.
async fn send(method: Method, path: &str, body: Option<serde_json::Value>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let auth_header = authorization(path, crate::util::session::load_access_token())?;
        let url = endpoints::join(&crate::config::api_base_url(), path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(value) = auth_header {
            builder = builder.header("Authorization", &value);
        }
        let request = match body {
            Some(json) => builder.json(&json).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            log::warn!("{method:?} {path} failed with status {status}");
            return Err(ApiError::from_response(status, &text));
        }
        Ok(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

fn to_value<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` a path and decode the JSON body.
///
/// # Errors
///
/// See the module docs.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode_body(&send(Method::Get, path, None).await?)
}

/// `POST` a JSON body and decode the response.
///
/// # Errors
///
/// See the module docs.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    decode_body(&send(Method::Post, path, Some(to_value(body)?)).await?)
}

/// `PATCH` a JSON body and decode the response.
///
/// # Errors
///
/// See the module docs.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    decode_body(&send(Method::Patch, path, Some(to_value(body)?)).await?)
}

/// `DELETE` a path, ignoring any response body.
///
/// # Errors
///
/// See the module docs.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    send(Method::Delete, path, None).await.map(|_| ())
}

/// Fetch a whole collection.
///
/// # Errors
///
/// See the module docs.
pub async fn list<T: DeserializeOwned>(resource: Resource) -> Result<Vec<T>, ApiError> {
    get_json(resource.path()).await
}

/// Create one record in a collection.
///
/// # Errors
///
/// See the module docs.
pub async fn create<B: Serialize>(resource: Resource, body: &B) -> Result<serde_json::Value, ApiError> {
    post_json(resource.path(), body).await
}

/// Update one record by id.
///
/// # Errors
///
/// See the module docs.
pub async fn update<B: Serialize>(resource: Resource, id: &str, body: &B) -> Result<serde_json::Value, ApiError> {
    patch_json(&resource.item(id), body).await
}

/// Delete one record by id.
///
/// # Errors
///
/// See the module docs.
pub async fn remove(resource: Resource, id: &str) -> Result<(), ApiError> {
    delete(&resource.item(id)).await
}

/// Delete many records in one request.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 405 for resources without a bulk
/// endpoint, otherwise see the module docs.
pub async fn bulk_delete(resource: Resource, ids: &[String]) -> Result<BulkDeleteResponse, ApiError> {
    let path = resource.bulk_delete().ok_or(ApiError::Status { status: 405 })?;
    let body = to_value(&BulkDeleteRequest { ids })?;
    decode_body(&send(Method::Delete, &path, Some(body)).await?)
}

/// `POST /auth/login`.
///
/// # Errors
///
/// See the module docs.
pub async fn login<B: Serialize>(payload: &B) -> Result<AuthTokens, ApiError> {
    post_json(endpoints::LOGIN, payload).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// See the module docs.
pub async fn register<B: Serialize>(payload: &B) -> Result<AuthTokens, ApiError> {
    post_json(endpoints::REGISTER, payload).await
}
