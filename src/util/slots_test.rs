#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_outside_browser_yields_none() {
    let slots = BrowserSlots::new();
    assert_eq!(slots.read("bazaar_wishlist"), None);
}

#[test]
fn write_outside_browser_is_dropped() {
    let mut slots = BrowserSlots::new();
    slots.write("bazaar_wishlist", "[]");
    assert_eq!(slots.read("bazaar_wishlist"), None);
}

#[test]
fn remove_outside_browser_is_noop_but_callable() {
    let mut slots = BrowserSlots::new();
    slots.remove("bazaar_wishlist");
}
