//! Product-details screen model.
//!
//! Holds the fetched product plus independent banner slots for the cart and
//! delete actions. Adding to the cart is local only; deleting goes to the API
//! and, on success, schedules a return to the list.

#[cfg(test)]
#[path = "product_details_test.rs"]
mod product_details_test;

use std::time::Duration;

use super::fetch::FetchState;
use super::notice::{Banner, Redirect};
use crate::net::api::{ApiError, ApiRequest, delete_product_request, get_product_request};
use crate::net::types::{Product, ProductId};
use crate::util::routes::PRODUCTS_PATH;

/// How long the add-to-cart confirmation stays visible.
pub const CART_NOTICE_DURATION: Duration = Duration::from_millis(3000);
/// Delay between a successful delete and returning to the list.
pub const DELETE_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load product details.";
pub const CART_ADDED_MESSAGE: &str = "Product added to cart successfully!";
pub const CART_FAILED_MESSAGE: &str = "Could not add product to cart.";
pub const DELETED_MESSAGE: &str = "Product deleted successfully!";
pub const DELETE_FAILED_MESSAGE: &str = "Error deleting product. Please try again.";

/// What the details screen shows in place of the product card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsPlaceholder {
    Loading,
    LoadError(String),
    NoData,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDetailsState {
    pub id: ProductId,
    pub product: FetchState<Product>,
    pub load_error_dismissed: bool,
    pub added_to_cart: bool,
    pub cart_error: Option<Banner>,
    pub deleted: Option<Banner>,
    pub delete_error: Option<Banner>,
}

impl ProductDetailsState {
    #[must_use]
    pub fn new(id: ProductId) -> Self {
        Self { id, product: FetchState::Loading, ..Self::default() }
    }

    #[must_use]
    pub fn load_request(&self) -> ApiRequest {
        get_product_request(&self.id)
    }

    /// Apply the read response. Responses for a different id are ignored.
    pub fn apply_loaded(&mut self, id: &ProductId, result: Result<Product, ApiError>) {
        if *id != self.id {
            return;
        }
        self.product = FetchState::from_outcome(Some(result), LOAD_FAILED_MESSAGE);
    }

    pub fn dismiss_load_error(&mut self) {
        self.load_error_dismissed = true;
    }

    /// `None` when the product card should render.
    #[must_use]
    pub fn placeholder(&self) -> Option<DetailsPlaceholder> {
        match &self.product {
            FetchState::Loaded(_) => None,
            FetchState::Loading => Some(DetailsPlaceholder::Loading),
            FetchState::Failed(message) if !self.load_error_dismissed => {
                Some(DetailsPlaceholder::LoadError(message.clone()))
            }
            FetchState::Failed(_) | FetchState::Idle => Some(DetailsPlaceholder::NoData),
        }
    }

    /// Show the cart confirmation; returns how long until it should clear.
    pub fn add_to_cart(&mut self) -> Duration {
        self.added_to_cart = true;
        self.cart_error = None;
        CART_NOTICE_DURATION
    }

    pub fn clear_cart_notice(&mut self) {
        self.added_to_cart = false;
    }

    /// The confirmation could not be scheduled.
    pub fn cart_failed(&mut self) {
        self.added_to_cart = false;
        self.cart_error = Some(Banner::error(CART_FAILED_MESSAGE));
    }

    #[must_use]
    pub fn cart_banner(&self) -> Option<Banner> {
        self.added_to_cart.then(|| Banner::success(CART_ADDED_MESSAGE))
    }

    pub fn dismiss_cart_error(&mut self) {
        self.cart_error = None;
    }

    #[must_use]
    pub fn delete_request(&self) -> ApiRequest {
        delete_product_request(&self.id)
    }

    /// Record the outcome of a delete; returns the redirect to schedule on success.
    ///
    /// On failure the product stays displayed as last fetched. Outcomes for an
    /// id other than the one on screen are ignored.
    pub fn apply_deleted(&mut self, id: &ProductId, result: Result<(), ApiError>) -> Option<Redirect> {
        if *id != self.id {
            return None;
        }
        match result {
            Ok(()) => {
                self.deleted = Some(Banner::success(DELETED_MESSAGE));
                self.delete_error = None;
                Some(Redirect { to: PRODUCTS_PATH.to_owned(), after: DELETE_REDIRECT_DELAY })
            }
            Err(_) => {
                self.delete_error = Some(Banner::error(DELETE_FAILED_MESSAGE));
                None
            }
        }
    }

    pub fn dismiss_deleted(&mut self) {
        self.deleted = None;
    }

    pub fn dismiss_delete_error(&mut self) {
        self.delete_error = None;
    }
}
