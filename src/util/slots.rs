//! Browser-backed slot storage for `stash` collections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the `stash` storage boundary over `localStorage` so wishlist
//! and address-book state survives across sessions on the same device.
//! Requires a browser environment; on the server every read yields `None`
//! and writes are dropped, so collections simply start empty during SSR.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

use stash::slot::SlotStore;

/// `localStorage`-backed slot storage. Zero-sized; the storage handle is
/// resolved per call because hydration owns no long-lived browser state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSlots;

impl BrowserSlots {
    /// Create a browser slot store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SlotStore for BrowserSlots {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write for {key} failed; value not persisted");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.remove_item(key).is_err() {
                log::warn!("localStorage remove for {key} failed");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
