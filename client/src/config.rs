//! Build-time client configuration.
//!
//! The storefront talks to the remote product API directly from the browser,
//! so the base URL is baked into the WASM bundle. Set `STOREFRONT_API_BASE`
//! when building to point at a different host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Public demo API used when no override is compiled in.
pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";

/// Base URL of the product API, without a trailing slash.
#[must_use]
pub fn api_base() -> &'static str {
    normalize_base(option_env!("STOREFRONT_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}
