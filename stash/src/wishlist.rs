//! Wishlist — the set-like favorites collection.
//!
//! DESIGN
//! ======
//! Membership is keyed by product id and de-duplicated; ordering carries no
//! meaning. Favorite/unfavorite is a single toggle so two presses with the
//! same product always return to the starting state.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use serde::{Deserialize, Serialize};

use crate::slot::SlotStore;
use crate::store::{CollectionStore, ObserverId, SlotEntry};

/// Slot key the wishlist persists under.
pub const WISHLIST_SLOT: &str = "bazaar_wishlist";

/// A favorited product as remembered on this device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// Product id this entry refers to.
    pub id: String,
    /// Product display name at the time of favoriting.
    pub name: String,
    /// Product image URL, if the product had one.
    pub image_url: Option<String>,
    /// Listed price in minor currency units at the time of favoriting.
    pub price_cents: i64,
}

impl SlotEntry for WishlistEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The device-local wishlist, persisted under [`WISHLIST_SLOT`].
pub struct Wishlist<S: SlotStore> {
    store: CollectionStore<WishlistEntry, S>,
}

impl<S: SlotStore> Wishlist<S> {
    /// Load the wishlist from storage, starting empty when the slot is
    /// absent or corrupt.
    pub fn load(slots: S) -> Self {
        Self { store: CollectionStore::load(WISHLIST_SLOT, slots) }
    }

    /// Favorite `entry` if absent, unfavorite it if present. Returns `true`
    /// if the product is favorited afterwards.
    pub fn toggle(&mut self, entry: WishlistEntry) -> bool {
        self.store.toggle(entry)
    }

    /// Unfavorite by product id. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Returns `true` if the product id is currently favorited.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Current entries.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        self.store.entries()
    }

    /// Number of favorited products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Register an observer notified after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&[WishlistEntry]) + 'static) -> ObserverId {
        self.store.subscribe(observer)
    }

    /// Remove a registered observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.store.unsubscribe(id)
    }
}
