//! Hash-keyed property store.
//!
//! Properties are not stored under their names but under the 32-bit hash a
//! [`KeyHasher`](crate::key::KeyHasher) computes for the name. Two names that
//! hash to the same key share one slot: the store performs no collision
//! detection and the last `put` wins.

use std::collections::HashMap;
use std::fmt;

use super::types::Value;
use crate::key::KeyHash;

/// Returned by [`ValueStore::get`] for keys that were never stored.
pub(crate) static NULL: Value = Value::Null;

/// Mapping from hashed key to [`Value`].
///
/// Built once by a deserializer through [`put`](Self::put), then read. There is
/// no removal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueStore {
    entries: HashMap<KeyHash, Value>,
}

impl ValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, replacing whatever was there.
    pub fn put(&mut self, key: KeyHash, value: Value) {
        self.entries.insert(key, value);
    }

    /// Look up `key`. Absent keys yield [`Value::Null`].
    pub fn get(&self, key: KeyHash) -> &Value {
        self.entries.get(&key).unwrap_or(&NULL)
    }

    /// Returns true if something was stored under `key`, even an explicit null.
    pub fn contains_key(&self, key: KeyHash) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keys in ascending order.
    pub fn keys(&self) -> Vec<KeyHash> {
        let mut keys: Vec<KeyHash> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

/// Stores have no textual form of their own; they print as an opaque marker.
impl fmt::Display for ValueStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<json-object>")
    }
}
