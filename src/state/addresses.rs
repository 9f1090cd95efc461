//! Address-book context — bridges the owned `stash` address book into Leptos.
//!
//! DESIGN
//! ======
//! Same bridge shape as the wishlist context: owned state created once in
//! `App`, a version signal bumped by a store observer, reactive reads and
//! plain mutators.

use leptos::prelude::*;

use stash::address_book::{AddressBook, AddressEntry, NewAddress};

use crate::util::slots::BrowserSlots;

/// Copyable context handle for the device-local address book.
#[derive(Clone, Copy)]
pub struct AddressBookContext {
    store: StoredValue<AddressBook<BrowserSlots>, LocalStorage>,
    version: RwSignal<u64>,
}

impl AddressBookContext {
    /// Load the address book from browser storage and wire change
    /// notification.
    #[must_use]
    pub fn new() -> Self {
        let version = RwSignal::new(0);
        let mut book = AddressBook::load(BrowserSlots::new());
        book.subscribe(move |_| version.update(|v| *v += 1));
        Self { store: StoredValue::new_local(book), version }
    }

    /// Saved addresses, most recent first. Reactive.
    #[must_use]
    pub fn entries(&self) -> Vec<AddressEntry> {
        self.version.track();
        self.store.with_value(|book| book.entries().to_vec())
    }

    /// Address with the given id, if saved. Reactive.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<AddressEntry> {
        self.version.track();
        self.store.with_value(|book| book.get(id).cloned())
    }

    /// Number of saved addresses. Reactive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.version.track();
        self.store.with_value(stash::address_book::AddressBook::len)
    }

    /// Returns `true` if no address is saved. Reactive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Save a new address and return its assigned id.
    pub fn add(&self, address: NewAddress) -> String {
        let mut assigned = String::new();
        self.store.update_value(|book| assigned = book.add(address));
        assigned
    }

    /// Delete a saved address by id.
    pub fn remove(&self, id: &str) {
        self.store.update_value(|book| {
            book.remove(id);
        });
    }
}

impl Default for AddressBookContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the address-book context provided by `App`.
#[must_use]
pub fn use_address_book() -> AddressBookContext {
    expect_context::<AddressBookContext>()
}
