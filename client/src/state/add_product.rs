//! Add-product screen model.
//!
//! The form stays populated after a successful submit so the user can tweak
//! and resubmit. There is no in-flight guard: each submit builds a fresh
//! creation request.

#[cfg(test)]
#[path = "add_product_test.rs"]
mod add_product_test;

use super::form::{ProductField, ProductForm};
use super::notice::Banner;
use crate::net::api::{ApiError, ApiRequest, create_product_request};
use crate::net::types::Product;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddProductState {
    pub form: ProductForm,
    pub success: Option<Banner>,
    pub error: Option<Banner>,
}

impl AddProductState {
    pub fn set_field(&mut self, field: ProductField, value: String) {
        self.form.set(field, value);
    }

    /// Creation request for the current field values.
    #[must_use]
    pub fn submission(&self) -> ApiRequest {
        create_product_request(&self.form)
    }

    /// Record the outcome of a creation request.
    pub fn apply_created(&mut self, result: Result<Product, ApiError>) {
        match result {
            Ok(product) => {
                self.success = Some(Banner::success(created_message(&product.title)));
                self.error = None;
            }
            Err(err) => {
                self.success = None;
                self.error = Some(Banner::error(submit_failed_message(&err)));
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

fn created_message(title: &str) -> String {
    format!("{title} created successfully!")
}

fn submit_failed_message(err: &ApiError) -> String {
    format!("Error submitting form. Please try again: {err}")
}
