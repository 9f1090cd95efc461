//! Client-local collection state for the marketplace UI.
//!
//! This crate keeps small per-device collections (the wishlist, the address
//! book) convergent with a persisted key-value slot: each collection is
//! loaded from its slot once at startup, held as owned in-memory state, and
//! mirrored back to the slot after every mutation. Corrupt or missing slot
//! content is absorbed to an empty collection: local persistence is an
//! optimization, not a source of truth. The host UI layer observes changes
//! through an explicit subscription list; no framework reactivity is
//! required here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`slot`] | Storage boundary: string-keyed slot trait + in-memory impl |
//! | [`codec`] | Collection payload encode/decode with a tagged decode error |
//! | [`store`] | Generic owned collection store with persist-on-mutate |
//! | [`wishlist`] | Set-like favorites collection, toggled by entry id |
//! | [`address_book`] | Most-recent-first address collection, capped at 10 |

pub mod address_book;
pub mod codec;
pub mod slot;
pub mod store;
pub mod wishlist;
