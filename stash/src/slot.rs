//! Storage boundary — string-keyed persistent slots.
//!
//! DESIGN
//! ======
//! The slot interface stores raw strings. Serialization is the codec's
//! responsibility, not the storage platform's, which keeps implementations
//! (browser localStorage, in-memory maps) free of any encoding dependency.
//! Reads of missing keys yield `None`; writes are best-effort and surface no
//! error, matching the synchronous fire-and-forget contract of the browser
//! storage APIs this abstracts.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use std::collections::HashMap;

/// A string-keyed, string-valued persistent storage boundary.
///
/// One slot holds one serialized collection. Implementations must treat a
/// missing key as "no value" and may silently drop writes (e.g. storage
/// quota exceeded); callers never observe a storage error.
pub trait SlotStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn write(&mut self, key: &str, value: &str);

    /// Remove `key` from storage. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

/// In-memory slot storage for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemorySlots {
    values: HashMap<String, String>,
}

impl MemorySlots {
    /// Create an empty in-memory slot store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single slot value.
    #[must_use]
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut slots = Self::new();
        slots.write(key, value);
        slots
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no slot holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SlotStore for MemorySlots {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
