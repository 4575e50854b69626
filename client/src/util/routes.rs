//! URL builders for the storefront's routes.
//!
//! Links, redirects, and the route table all derive their paths from here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::ProductId;

pub const HOME_PATH: &str = "/";
pub const PRODUCTS_PATH: &str = "/products";
pub const ADD_PRODUCT_PATH: &str = "/addproduct";

/// Brand image, served by the host from the assets directory.
pub const LOGO_PATH: &str = "/assets/logo.svg";

/// `/products/{id}`
#[must_use]
pub fn product_path(id: &ProductId) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

/// `/products/{id}/edit`
#[must_use]
pub fn edit_product_path(id: &ProductId) -> String {
    format!("{PRODUCTS_PATH}/{id}/edit")
}
