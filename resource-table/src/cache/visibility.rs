//! In-memory column visibility store using DashMap

use std::sync::Arc;

use dashmap::DashMap;

use crate::table::ColumnVisibility;

/// Column-visibility preferences shared by the tables of one page group.
///
/// Keyed by resource kind. Cheap to clone; clones share the same map, and
/// the data is lost when the last clone is dropped.
///
/// # Example
///
/// ```
/// use resource_table::cache::VisibilityStore;
///
/// let store = VisibilityStore::new();
/// assert!(store.get("item").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct VisibilityStore {
    store: Arc<DashMap<String, ColumnVisibility>>,
}

impl VisibilityStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the saved visibility for a resource kind.
    pub fn get(&self, kind: &str) -> Option<ColumnVisibility> {
        self.store.get(kind).map(|entry| entry.value().clone())
    }

    /// Saves the visibility for a resource kind.
    pub fn set(&self, kind: &str, visibility: ColumnVisibility) {
        self.store.insert(kind.to_string(), visibility);
    }

    /// Forgets the saved visibility for a resource kind.
    pub fn remove(&self, kind: &str) {
        self.store.remove(kind);
    }

    /// Returns the number of resource kinds with saved preferences.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
