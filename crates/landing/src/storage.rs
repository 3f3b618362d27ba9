//! Persistence adapter over the host's key-value storage.
//!
//! The landing page persists exactly two values: the selected theme and the
//! serialized cart. The host surface (browser local storage or a test
//! stand-in) is modeled as synchronous string get/set with no schema layer;
//! callers own (de)serialization and must treat stored content as untrusted.

use std::collections::HashMap;

/// Storage keys for persisted values.
pub mod keys {
    /// Key for the selected display theme (`"light"` or `"dark"`).
    pub const THEME: &str = "theme";

    /// Key for the serialized cart line items (JSON array).
    pub const CART: &str = "cart";
}

/// A string-valued key-value store.
///
/// Assumed synchronous and always available; writes are full overwrites with
/// last-write-wins semantics.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`Storage`] implementation.
///
/// The default backing store for tests and embedders that do not bridge to a
/// real host store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries.
    #[must_use]
    pub fn seeded<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}
