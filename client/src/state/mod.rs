//! Per-screen state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each screen owns one plain struct that decides which request to send and
//! which banner or redirect follows a response. Components hold these in
//! signals and stay thin; the logic is unit-tested without a browser.

pub mod add_product;
pub mod carousel;
pub mod edit_product;
pub mod fetch;
pub mod form;
pub mod notice;
pub mod product_details;
