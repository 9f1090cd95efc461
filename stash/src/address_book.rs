//! Address book — the most-recent-first delivery address collection.
//!
//! DESIGN
//! ======
//! New addresses are assigned a fresh UUID and inserted at the front; the
//! book keeps at most [`MAX_ADDRESSES`] entries, dropping the oldest on
//! overflow. Insertion order is meaningful: views render the book
//! most-recent-first.

#[cfg(test)]
#[path = "address_book_test.rs"]
mod address_book_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slot::SlotStore;
use crate::store::{CollectionStore, ObserverId, SlotEntry};

/// Slot key the address book persists under.
pub const ADDRESS_BOOK_SLOT: &str = "bazaar_addresses";

/// Maximum number of addresses kept; the oldest entry is dropped first.
pub const MAX_ADDRESSES: usize = 10;

/// A saved delivery address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    /// Unique entry id, assigned at [`AddressBook::add`].
    pub id: String,
    /// Short label shown in pickers, e.g. `"Home"` or `"Work"`.
    pub label: String,
    /// Name of the person receiving the delivery.
    pub recipient: String,
    /// First address line.
    pub line1: String,
    /// Second address line, if any.
    pub line2: Option<String>,
    /// City or locality.
    pub city: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// Contact phone number, if provided.
    pub phone: Option<String>,
}

impl SlotEntry for AddressEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A delivery address as entered in the UI, before an id is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewAddress {
    /// Short label shown in pickers.
    pub label: String,
    /// Name of the person receiving the delivery.
    pub recipient: String,
    /// First address line.
    pub line1: String,
    /// Second address line, if any.
    pub line2: Option<String>,
    /// City or locality.
    pub city: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// Contact phone number, if provided.
    pub phone: Option<String>,
}

/// The device-local address book, persisted under [`ADDRESS_BOOK_SLOT`].
pub struct AddressBook<S: SlotStore> {
    store: CollectionStore<AddressEntry, S>,
}

impl<S: SlotStore> AddressBook<S> {
    /// Load the address book from storage, starting empty when the slot is
    /// absent or corrupt.
    pub fn load(slots: S) -> Self {
        Self { store: CollectionStore::load(ADDRESS_BOOK_SLOT, slots) }
    }

    /// Save a new address at the front of the book and return its assigned
    /// id. The book is truncated to [`MAX_ADDRESSES`], dropping the oldest.
    pub fn add(&mut self, address: NewAddress) -> String {
        let id = Uuid::new_v4().to_string();
        let entry = AddressEntry {
            id: id.clone(),
            label: address.label,
            recipient: address.recipient,
            line1: address.line1,
            line2: address.line2,
            city: address.city,
            postal_code: address.postal_code,
            phone: address.phone,
        };
        self.store.prepend_capped(entry, MAX_ADDRESSES);
        id
    }

    /// Delete the address with the given id. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    /// Address with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AddressEntry> {
        self.store.get(id)
    }

    /// Returns `true` if an address with the given id is saved.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Saved addresses, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[AddressEntry] {
        self.store.entries()
    }

    /// Number of saved addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no address is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Register an observer notified after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&[AddressEntry]) + 'static) -> ObserverId {
        self.store.subscribe(observer)
    }

    /// Remove a registered observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.store.unsubscribe(id)
    }
}
