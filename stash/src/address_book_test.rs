use std::collections::HashSet;

use super::*;
use crate::slot::MemorySlots;

fn new_address(label: &str) -> NewAddress {
    NewAddress {
        label: label.to_owned(),
        recipient: "Avery Quinn".to_owned(),
        line1: "12 Market Lane".to_owned(),
        line2: None,
        city: "Portsmouth".to_owned(),
        postal_code: "PO1 2AB".to_owned(),
        phone: Some("+44 7700 900123".to_owned()),
    }
}

// =============================================================
// add
// =============================================================

#[test]
fn add_assigns_id_and_prepends() {
    let mut book = AddressBook::load(MemorySlots::new());
    let home = book.add(new_address("Home"));
    let work = book.add(new_address("Work"));

    assert_eq!(book.len(), 2);
    assert_eq!(book.entries()[0].id, work);
    assert_eq!(book.entries()[0].label, "Work");
    assert_eq!(book.entries()[1].id, home);
}

#[test]
fn add_copies_all_fields() {
    let mut book = AddressBook::load(MemorySlots::new());
    let mut address = new_address("Home");
    address.line2 = Some("Flat 3".to_owned());
    let id = book.add(address);

    let entry = book.get(&id).unwrap();
    assert_eq!(entry.recipient, "Avery Quinn");
    assert_eq!(entry.line1, "12 Market Lane");
    assert_eq!(entry.line2, Some("Flat 3".to_owned()));
    assert_eq!(entry.city, "Portsmouth");
    assert_eq!(entry.postal_code, "PO1 2AB");
    assert_eq!(entry.phone, Some("+44 7700 900123".to_owned()));
}

#[test]
fn add_generates_unique_ids() {
    let mut book = AddressBook::load(MemorySlots::new());
    let ids: HashSet<String> = (0..MAX_ADDRESSES).map(|_| book.add(new_address("Home"))).collect();
    assert_eq!(ids.len(), MAX_ADDRESSES);
}

#[test]
fn add_beyond_cap_drops_oldest() {
    let mut book = AddressBook::load(MemorySlots::new());
    let oldest = book.add(new_address("Oldest"));
    for i in 1..MAX_ADDRESSES {
        book.add(new_address(&format!("Address {i}")));
    }
    assert_eq!(book.len(), MAX_ADDRESSES);

    let newest = book.add(new_address("New"));
    assert_eq!(book.len(), MAX_ADDRESSES);
    assert_eq!(book.entries()[0].id, newest);
    assert_eq!(book.entries()[0].label, "New");
    assert!(!book.contains(&oldest));
}

#[test]
fn length_never_exceeds_cap() {
    let mut book = AddressBook::load(MemorySlots::new());
    for i in 0..25 {
        book.add(new_address(&format!("Address {i}")));
        assert!(book.len() <= MAX_ADDRESSES);
    }
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_deletes_entry() {
    let mut book = AddressBook::load(MemorySlots::new());
    let id = book.add(new_address("Home"));
    assert!(book.remove(&id));
    assert!(book.is_empty());
}

#[test]
fn remove_absent_id_is_noop() {
    let mut book = AddressBook::load(MemorySlots::new());
    book.add(new_address("Home"));
    assert!(!book.remove("not-an-id"));
    assert_eq!(book.len(), 1);
}

// =============================================================
// persistence
// =============================================================

#[test]
fn address_book_round_trips_through_slot() {
    let mut book = AddressBook::load(MemorySlots::new());
    book.add(new_address("Home"));
    book.add(new_address("Work"));

    let reloaded = AddressBook::load(book.store.slots().clone());
    assert_eq!(reloaded.entries(), book.entries());
}

#[test]
fn reload_preserves_most_recent_first_order() {
    let mut book = AddressBook::load(MemorySlots::new());
    book.add(new_address("First"));
    book.add(new_address("Second"));

    let reloaded = AddressBook::load(book.store.slots().clone());
    assert_eq!(reloaded.entries()[0].label, "Second");
    assert_eq!(reloaded.entries()[1].label, "First");
}

#[test]
fn corrupt_slot_loads_empty() {
    let slots = MemorySlots::with_slot(ADDRESS_BOOK_SLOT, "\u{1}binary\u{2}");
    let book = AddressBook::load(slots);
    assert!(book.is_empty());
}

#[test]
fn entry_serde_round_trips() {
    let mut book = AddressBook::load(MemorySlots::new());
    let id = book.add(new_address("Home"));
    let entry = book.get(&id).unwrap().clone();

    let raw = serde_json::to_string(&entry).unwrap();
    let back: AddressEntry = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, entry);
}
