//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `wishlist`, `addresses`, etc.) so
//! individual components can depend on small focused models. Collection
//! state that survives the session lives in the `stash` crate; the modules
//! here bridge it into Leptos context.

pub mod addresses;
pub mod auth;
pub mod delivery;
pub mod stats;
pub mod wishlist;
