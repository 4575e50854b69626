//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen state, issues its own API calls, and delegates
//! rendering details to `components`. Pages share nothing; every screen
//! fetches what it shows.

pub mod add_product;
pub mod edit_product;
pub mod home;
pub mod product_details;
pub mod product_list;
