//! Generic owned collection store with persist-on-mutate.
//!
//! DESIGN
//! ======
//! One store owns one in-memory collection and one persisted slot. The slot
//! is read exactly once, at [`CollectionStore::load`]; every mutator applies
//! its in-memory transformation, overwrites the slot with the full serialized
//! collection, and notifies registered observers. Reads are pure.
//!
//! ERROR HANDLING
//! ==============
//! A corrupt slot payload is absorbed at load time: the store starts from an
//! empty collection and logs the reset. Mutators are total functions over
//! owned state and surface no errors. There is no durability guarantee if
//! the process terminates between mutation and persist; the window is a
//! single synchronous call.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::{decode_entries, encode_entries};
use crate::slot::SlotStore;

/// An entry that can live in a persisted collection.
///
/// Entries are plain serializable data identified by a unique string id
/// within their collection.
pub trait SlotEntry: Clone + Serialize + DeserializeOwned {
    /// Unique identifier of this entry within its collection.
    fn id(&self) -> &str;
}

/// Handle returned by [`CollectionStore::subscribe`], used to unsubscribe.
pub type ObserverId = u64;

/// An owned collection kept convergent with one persisted slot.
pub struct CollectionStore<T: SlotEntry, S: SlotStore> {
    key: String,
    slots: S,
    entries: Vec<T>,
    observers: Vec<(ObserverId, Box<dyn FnMut(&[T])>)>,
    next_observer: ObserverId,
}

impl<T: SlotEntry, S: SlotStore> CollectionStore<T, S> {
    /// Load the collection stored under `key`, or start empty.
    ///
    /// An absent slot yields an empty collection. A present-but-malformed
    /// payload also yields an empty collection; the corruption is logged and
    /// never surfaced, and the slot heals on the next mutation.
    pub fn load(key: impl Into<String>, slots: S) -> Self {
        let key = key.into();
        let entries = match slots.read(&key) {
            None => Vec::new(),
            Some(raw) => match decode_entries(&raw) {
                Ok(entries) => entries,
                Err(failure) => {
                    log::warn!("slot {key} held a corrupt collection payload ({failure}); starting empty");
                    Vec::new()
                }
            },
        };
        Self { key, slots, entries, observers: Vec::new(), next_observer: 0 }
    }

    /// Current entries, in collection order.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Entry with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Returns `true` if an entry with the given id is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    /// Number of entries in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot key this store persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying slot storage.
    #[must_use]
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Insert an entry at the front of the collection.
    pub fn prepend(&mut self, entry: T) {
        self.entries.insert(0, entry);
        self.commit();
    }

    /// Insert an entry at the front, then drop entries beyond `cap` from the
    /// back (oldest first).
    pub fn prepend_capped(&mut self, entry: T, cap: usize) {
        self.entries.insert(0, entry);
        self.entries.truncate(cap);
        self.commit();
    }

    /// Insert an entry at the back of the collection.
    pub fn append(&mut self, entry: T) {
        self.entries.push(entry);
        self.commit();
    }

    /// Remove the entry with the given id.
    ///
    /// Removing an absent id is a no-op and returns `false`; the slot is not
    /// rewritten and observers are not notified.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        if self.entries.len() == before {
            return false;
        }
        self.commit();
        true
    }

    /// Remove the entry sharing `entry`'s id if present, otherwise append
    /// `entry`. Returns `true` if the entry is present afterwards.
    ///
    /// Two successive toggles with the same id leave the collection
    /// unchanged.
    pub fn toggle(&mut self, entry: T) -> bool {
        let id = entry.id().to_owned();
        if self.contains(&id) {
            self.remove(&id);
            false
        } else {
            self.append(entry);
            true
        }
    }

    /// Replace the collection with the empty sequence.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.commit();
    }

    /// Register an observer called with the full collection after every
    /// committed mutation. Returns a handle for [`unsubscribe`].
    ///
    /// [`unsubscribe`]: CollectionStore::unsubscribe
    pub fn subscribe(&mut self, observer: impl FnMut(&[T]) + 'static) -> ObserverId {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a registered observer. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Persist the full collection to the slot, then notify observers.
    fn commit(&mut self) {
        let payload = encode_entries(&self.entries);
        self.slots.write(&self.key, &payload);
        for (_, observer) in &mut self.observers {
            observer(&self.entries);
        }
    }
}
