//! Wishlist context — bridges the owned `stash` wishlist into Leptos.
//!
//! DESIGN
//! ======
//! The wishlist itself is owned state created once in `App` and provided
//! down the tree; there is no ambient global. Views subscribe through a
//! version signal that a registered store observer bumps after every
//! mutation, so reads re-run exactly when the collection changes.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use leptos::prelude::*;

use stash::wishlist::{Wishlist, WishlistEntry};

use crate::net::types::Product;
use crate::util::slots::BrowserSlots;

/// Wishlist entry capturing a product as listed at favoriting time.
#[must_use]
pub fn entry_for_product(product: &Product) -> WishlistEntry {
    WishlistEntry {
        id: product.id.clone(),
        name: product.name.clone(),
        image_url: product.image_url.clone(),
        price_cents: product.price_cents,
    }
}

/// Copyable context handle for the device-local wishlist.
#[derive(Clone, Copy)]
pub struct WishlistContext {
    store: StoredValue<Wishlist<BrowserSlots>, LocalStorage>,
    version: RwSignal<u64>,
}

impl WishlistContext {
    /// Load the wishlist from browser storage and wire change notification.
    #[must_use]
    pub fn new() -> Self {
        let version = RwSignal::new(0);
        let mut wishlist = Wishlist::load(BrowserSlots::new());
        wishlist.subscribe(move |_| version.update(|v| *v += 1));
        Self { store: StoredValue::new_local(wishlist), version }
    }

    /// Current entries. Reactive: tracking scopes re-run on mutation.
    #[must_use]
    pub fn entries(&self) -> Vec<WishlistEntry> {
        self.version.track();
        self.store.with_value(|wishlist| wishlist.entries().to_vec())
    }

    /// Returns `true` if the product id is favorited. Reactive.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.version.track();
        self.store.with_value(|wishlist| wishlist.contains(id))
    }

    /// Number of favorited products. Reactive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.version.track();
        self.store.with_value(stash::wishlist::Wishlist::len)
    }

    /// Returns `true` if nothing is favorited. Reactive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Favorite or unfavorite a product.
    pub fn toggle(&self, entry: WishlistEntry) {
        self.store.update_value(|wishlist| {
            wishlist.toggle(entry);
        });
    }

    /// Unfavorite by product id.
    pub fn remove(&self, id: &str) {
        self.store.update_value(|wishlist| {
            wishlist.remove(id);
        });
    }

    /// Remove every favorite.
    pub fn clear(&self) {
        self.store.update_value(stash::wishlist::Wishlist::clear);
    }
}

impl Default for WishlistContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the wishlist context provided by `App`.
#[must_use]
pub fn use_wishlist() -> WishlistContext {
    expect_context::<WishlistContext>()
}
