//! Networking modules for the remote product API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and executes REST calls, and `types` defines the product
//! schema exchanged with the API.

pub mod api;
pub mod types;
