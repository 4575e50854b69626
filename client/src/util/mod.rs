//! Utility helpers shared across client UI modules.

pub mod routes;
pub mod timer;
