//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guards, form state)
//! and delegates rendering details to `components`.

pub mod admin;
pub mod checkout;
pub mod login;
pub mod orders;
pub mod product;
pub mod seller;
pub mod shop;
pub mod wishlist;
