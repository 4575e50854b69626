//! Edit-product screen model.
//!
//! LIFECYCLE
//! =========
//! `new` starts in the loading state for a route id. The load response
//! pre-fills the form; a failed load still clears loading and leaves the
//! form empty, but is reported through the error banner. A successful update
//! yields a [`Redirect`] back to the details screen.

#[cfg(test)]
#[path = "edit_product_test.rs"]
mod edit_product_test;

use std::time::Duration;

use super::form::{ProductField, ProductForm};
use super::notice::{Banner, Redirect};
use crate::net::api::{ApiError, ApiRequest, get_product_request, update_product_request};
use crate::net::types::{Product, ProductId};
use crate::util::routes::product_path;

/// Delay between a successful update and returning to the details screen.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub const UPDATED_MESSAGE: &str = "Product updated successfully!";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update product. Please try again.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load product. The form starts empty.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditProductState {
    pub id: ProductId,
    pub form: ProductForm,
    pub loading: bool,
    pub success: Option<Banner>,
    pub error: Option<Banner>,
}

impl EditProductState {
    #[must_use]
    pub fn new(id: ProductId) -> Self {
        Self { id, loading: true, ..Self::default() }
    }

    /// Read request used to pre-fill the form.
    #[must_use]
    pub fn load_request(&self) -> ApiRequest {
        get_product_request(&self.id)
    }

    /// Apply the pre-fill response. Responses for a different id are ignored.
    pub fn apply_loaded(&mut self, id: &ProductId, result: Result<Product, ApiError>) {
        if *id != self.id {
            return;
        }
        self.loading = false;
        match result {
            Ok(product) => self.form = ProductForm::from(&product),
            Err(_) => self.error = Some(Banner::error(LOAD_FAILED_MESSAGE)),
        }
    }

    pub fn set_field(&mut self, field: ProductField, value: String) {
        self.form.set(field, value);
    }

    /// Update request for the edited values.
    #[must_use]
    pub fn submission(&self) -> ApiRequest {
        update_product_request(&self.id, &self.form)
    }

    /// Record the outcome of an update; returns the redirect to schedule on success.
    ///
    /// `id` is the product the update was sent for. Outcomes for any other id
    /// are ignored.
    pub fn apply_updated(&mut self, id: &ProductId, result: Result<(), ApiError>) -> Option<Redirect> {
        if *id != self.id {
            return None;
        }
        match result {
            Ok(()) => {
                self.success = Some(Banner::success(UPDATED_MESSAGE));
                self.error = None;
                Some(Redirect { to: product_path(&self.id), after: REDIRECT_DELAY })
            }
            Err(_) => {
                self.success = None;
                self.error = Some(Banner::error(UPDATE_FAILED_MESSAGE));
                None
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
