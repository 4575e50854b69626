//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components are presentational: they receive data and callbacks from pages
//! and never call the product API themselves.

pub mod alert;
pub mod carousel;
pub mod loading_error;
pub mod navigation_bar;
pub mod product_card;
pub mod product_form;
