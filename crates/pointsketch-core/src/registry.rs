//! Named store of collection snapshots (presets).

use crate::collection::PointCollection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A collection that may be shared between the registry and its creator.
pub type SharedCollection = Rc<RefCell<PointCollection>>;

/// In-memory registry of presets, keyed by name.
///
/// Entries added with [`Registry::add`] are private copies. Entries added
/// with [`Registry::add_by_reference`] alias the caller's collection, so
/// later edits to it show through the registry.
#[derive(Debug, Default)]
pub struct Registry {
    sets: HashMap<String, SharedCollection>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `collection` under its own name.
    pub fn add(&mut self, collection: &PointCollection) {
        self.add_as(collection, collection.name());
    }

    /// Store a copy of `collection` under `name`, replacing any entry with
    /// that name. The stored copy is renamed to `name`.
    pub fn add_as(&mut self, collection: &PointCollection, name: &str) {
        let mut copy = collection.clone();
        copy.rename(name);
        log::debug!("registry: stored copy of {:?} as {:?} ({} points)", collection.name(), name, copy.len());
        self.sets.insert(name.to_string(), Rc::new(RefCell::new(copy)));
    }

    /// Store the collection itself under its current name.
    pub fn add_by_reference(&mut self, collection: SharedCollection) {
        let name = collection.borrow().name().to_string();
        log::debug!("registry: linked {:?}", name);
        self.sets.insert(name, collection);
    }

    /// Get the entry stored under `name`.
    pub fn get(&self, name: &str) -> Option<SharedCollection> {
        self.sets.get(name).cloned()
    }

    /// Get a detached copy of the entry stored under `name`.
    pub fn snapshot(&self, name: &str) -> Option<PointCollection> {
        self.sets.get(name).map(|set| set.borrow().clone())
    }

    /// Remove the entry stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<SharedCollection> {
        self.sets.remove(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// All preset names, sorted for display.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sets.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
