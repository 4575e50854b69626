//! REST client for the remote product API.
//!
//! Requests are plain [`ApiRequest`] values built by the functions below so
//! screens can decide what to send without a browser. Execution happens only
//! client-side (hydrate) through `gloo-net`; on the server every call returns
//! [`ApiError::Unavailable`] and pages render their loading placeholders.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are folded into [`ApiError`] so
//! screens can turn them into banner text without panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde::de::DeserializeOwned;

use super::types::{Product, ProductId};
use crate::config::api_base;
use crate::state::form::ProductForm;

/// HTTP verbs used by the product endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A single call against the product API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to [`api_base`], always starting with `/`.
    pub path: String,
    pub body: Option<ProductForm>,
}

impl ApiRequest {
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", api_base(), self.path)
    }
}

/// Failure modes of a product API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("could not encode request body: {0}")]
    Encode(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("not available on server")]
    Unavailable,
}

fn products_endpoint() -> String {
    "/products".to_owned()
}

fn product_endpoint(id: &ProductId) -> String {
    format!("/products/{id}")
}

/// `GET /products`
#[must_use]
pub fn list_products_request() -> ApiRequest {
    ApiRequest { method: Method::Get, path: products_endpoint(), body: None }
}

/// `GET /products/{id}`
#[must_use]
pub fn get_product_request(id: &ProductId) -> ApiRequest {
    ApiRequest { method: Method::Get, path: product_endpoint(id), body: None }
}

/// `POST /products` with the form as JSON body.
#[must_use]
pub fn create_product_request(form: &ProductForm) -> ApiRequest {
    ApiRequest { method: Method::Post, path: products_endpoint(), body: Some(form.clone()) }
}

/// `PUT /products/{id}` with the form as JSON body.
#[must_use]
pub fn update_product_request(id: &ProductId, form: &ProductForm) -> ApiRequest {
    ApiRequest { method: Method::Put, path: product_endpoint(id), body: Some(form.clone()) }
}

/// `DELETE /products/{id}`
#[must_use]
pub fn delete_product_request(id: &ProductId) -> ApiRequest {
    ApiRequest { method: Method::Delete, path: product_endpoint(id), body: None }
}

/// Fetch the full product collection.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a product list.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    send_json(list_products_request()).await
}

/// Execute a request and decode the JSON response body.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status, or a body
/// that does not decode as `T`.
pub async fn send_json<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = execute(&request).await?;
        resp.json::<T>().await.map_err(|e| {
            log::error!("{} {} returned an undecodable body: {e}", request.method, request.path);
            ApiError::Decode(e.to_string())
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Execute a request whose response body is not needed.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-2xx status.
pub async fn send_empty(request: ApiRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(&request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn execute(request: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = request.url();
    log::debug!("{} {url}", request.method);

    let builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    let sent = match &request.body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| {
        log::error!("{} {url} failed: {e}", request.method);
        ApiError::Network(e.to_string())
    })?;
    if !resp.ok() {
        log::error!("{} {url} returned status {}", request.method, resp.status());
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}
