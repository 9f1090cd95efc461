use super::*;
use crate::slot::MemorySlots;

fn soap() -> WishlistEntry {
    WishlistEntry {
        id: "p1".to_owned(),
        name: "Soap".to_owned(),
        image_url: None,
        price_cents: 450,
    }
}

fn towel() -> WishlistEntry {
    WishlistEntry {
        id: "p2".to_owned(),
        name: "Towel".to_owned(),
        image_url: Some("https://img.example/towel.jpg".to_owned()),
        price_cents: 1299,
    }
}

// =============================================================
// toggle semantics
// =============================================================

#[test]
fn toggle_empty_wishlist_adds_entry() {
    let mut wishlist = Wishlist::load(MemorySlots::new());
    assert!(wishlist.toggle(soap()));
    assert_eq!(wishlist.entries(), &[soap()]);
}

#[test]
fn toggle_again_removes_entry() {
    let mut wishlist = Wishlist::load(MemorySlots::new());
    wishlist.toggle(soap());
    assert!(!wishlist.toggle(soap()));
    assert!(wishlist.is_empty());
}

#[test]
fn toggle_dedupes_by_id() {
    let mut wishlist = Wishlist::load(MemorySlots::new());
    wishlist.toggle(soap());
    wishlist.toggle(towel());
    // Toggling a variant with the same id removes rather than duplicating.
    let mut soap_repriced = soap();
    soap_repriced.price_cents = 999;
    wishlist.toggle(soap_repriced);
    assert_eq!(wishlist.len(), 1);
    assert!(wishlist.contains("p2"));
    assert!(!wishlist.contains("p1"));
}

// =============================================================
// remove / clear / contains
// =============================================================

#[test]
fn remove_absent_id_is_noop() {
    let mut wishlist = Wishlist::load(MemorySlots::new());
    wishlist.toggle(soap());
    assert!(!wishlist.remove("missing"));
    assert_eq!(wishlist.len(), 1);
}

#[test]
fn remove_present_id_deletes() {
    let mut wishlist = Wishlist::load(MemorySlots::new());
    wishlist.toggle(soap());
    wishlist.toggle(towel());
    assert!(wishlist.remove("p1"));
    assert_eq!(wishlist.entries(), &[towel()]);
}

#[test]
fn clear_empties_wishlist() {
    let mut wishlist = Wishlist::load(MemorySlots::new());
    wishlist.toggle(soap());
    wishlist.toggle(towel());
    wishlist.clear();
    assert!(wishlist.is_empty());
}

#[test]
fn contains_reflects_membership() {
    let mut wishlist = Wishlist::load(MemorySlots::new());
    assert!(!wishlist.contains("p1"));
    wishlist.toggle(soap());
    assert!(wishlist.contains("p1"));
}

// =============================================================
// persistence
// =============================================================

#[test]
fn wishlist_round_trips_through_slot() {
    let mut wishlist = Wishlist::load(MemorySlots::new());
    wishlist.toggle(soap());
    wishlist.toggle(towel());

    let reloaded = Wishlist::load(wishlist.store.slots().clone());
    assert_eq!(reloaded.entries(), wishlist.entries());
}

#[test]
fn corrupt_slot_loads_empty() {
    let slots = MemorySlots::with_slot(WISHLIST_SLOT, "]]]not json");
    let wishlist = Wishlist::load(slots);
    assert!(wishlist.is_empty());
}

#[test]
fn entry_serde_round_trips() {
    let raw = serde_json::to_string(&towel()).unwrap();
    let back: WishlistEntry = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, towel());
}
