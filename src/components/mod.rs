//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and list items while reading/writing
//! shared state from Leptos context providers.

pub mod address_card;
pub mod navbar;
pub mod order_row;
pub mod product_card;
