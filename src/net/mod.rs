//! Networking modules for the remote table-store backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `table` owns the generic row-endpoint call shape, `api` layers typed
//! marketplace operations over it, and `types` defines the shared wire
//! schema.

pub mod api;
pub mod table;
pub mod types;
