//! Delivery-mode preference for checkout.
//!
//! Reads the buyer's preferred delivery mode from its storage slot at app
//! start and writes it back when changed. Unknown or absent slot values fall
//! back to courier delivery. Requires a browser environment; on the server
//! the default mode is used.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use stash::slot::SlotStore;

use crate::net::types::DeliveryMode;
use crate::util::slots::BrowserSlots;

/// Slot key the delivery-mode preference persists under.
pub const DELIVERY_MODE_SLOT: &str = "bazaar_delivery_mode";

/// Read the preferred delivery mode from storage.
#[must_use]
pub fn load_preference() -> DeliveryMode {
    let slots = BrowserSlots::new();
    DeliveryMode::from_slot_value(slots.read(DELIVERY_MODE_SLOT).as_deref())
}

/// Persist the preferred delivery mode.
pub fn store_preference(mode: DeliveryMode) {
    let mut slots = BrowserSlots::new();
    slots.write(DELIVERY_MODE_SLOT, mode.as_str());
}
