//! ValueStore trait for abstracting the host's persistent settings store.
//!
//! The renderer reads the user's stored choices through this trait
//! without being tied to any particular persistence mechanism.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

/// Read-only access to the host's persisted user values.
///
/// Keys are the deterministic compositions of property kind and section
/// id built by `PropertyKind::value_key`. A failing lookup is
/// indistinguishable from an unset value: both return `None`, and the
/// renderer degrades to omitting the declaration.
pub trait ValueStore: Send + Sync + Debug {
    /// Returns the stored value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns a human-readable name for this store (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory value store.
///
/// Values must be pre-populated before rendering. Useful for tests and
/// for hosts that snapshot their settings up front.
#[derive(Debug, Default)]
pub struct InMemoryValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryValueStore {
    pub fn new() -> Self {
        Self { values: RwLock::new(HashMap::new()) }
    }

    /// Stores a value under `key`, replacing any previous value.
    ///
    /// Does nothing if the internal lock is poisoned.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.into(), value.into());
        }
    }

    /// Removes the value stored under `key`, returning it.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.write().ok()?.remove(key)
    }

    /// Clears all stored values.
    pub fn clear(&self) {
        if let Ok(mut values) = self.values.write() {
            values.clear();
        }
    }

    /// Number of stored values. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().map(|v| v.is_empty()).unwrap_or(true)
    }
}

impl ValueStore for InMemoryValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn name(&self) -> &'static str {
        "InMemoryValueStore"
    }
}
