//! Resource cache keyed by upstream path
//!
//! Stores parsed JSON documents behind `Arc` so a cache hit hands back the
//! very same document that was stored, without cloning the tree.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

/// Process-lifetime map from resource path to parsed document
///
/// An entry, once stored, is never replaced: its presence means a prior
/// fetch of that path succeeded.
#[derive(Debug, Default)]
pub struct ResourceCache {
    /// Stored documents keyed by resource path
    entries: RwLock<HashMap<String, Arc<Value>>>,
    /// Sum of the response body sizes of every stored entry
    total_bytes: AtomicU64,
}

impl ResourceCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached document for `path`, if any
    pub fn get(&self, path: &str) -> Option<Arc<Value>> {
        self.entries.read().get(path).cloned()
    }

    /// Stores `document` under `path` and adds `byte_size` to the running total
    ///
    /// If another fetch already stored `path`, the existing document is kept
    /// and returned, and the byte total is left alone.
    pub fn put(&self, path: &str, document: Value, byte_size: u64) -> Arc<Value> {
        let mut entries = self.entries.write();
        match entries.entry(path.to_string()) {
            Entry::Occupied(existing) => Arc::clone(existing.get()),
            Entry::Vacant(slot) => {
                self.total_bytes.fetch_add(byte_size, Ordering::Relaxed);
                Arc::clone(slot.insert(Arc::new(document)))
            }
        }
    }

    /// Whether `path` has been stored
    pub fn contains(&self, path: &str) -> bool {
        self.entries.read().contains_key(path)
    }

    /// Number of distinct cached paths
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total body bytes of all stored responses
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes.load(Ordering::Relaxed)
    }
}
