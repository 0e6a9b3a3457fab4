//! Property-name hashing.
//!
//! Stores are keyed by a 32-bit hash of the property name rather than the
//! name itself. The hash function is a capability handed to whoever needs it
//! (an [`Accessor`](crate::json::Accessor), the [`bridge`](crate::bridge)),
//! never a global, so tests can inject a deterministic fake.
//!
//! Hashers must be deterministic within a process. They are allowed to
//! collide; nothing downstream detects it.

mod name_hasher;

pub use name_hasher::{name_key, NameHasher};

use std::cell::RefCell;
use std::collections::HashMap;

/// A hashed property name.
///
/// Distinct names may map to the same key. A store treats them as one property.
pub type KeyHash = i32;

/// Maps a property name to its [`KeyHash`].
pub trait KeyHasher {
    /// Hash `name`. Must return the same key for the same name every time.
    fn hash(&self, name: &str) -> KeyHash;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> KeyHash,
{
    fn hash(&self, name: &str) -> KeyHash {
        self(name)
    }
}

/// Memoizes another hasher's results per name.
///
/// Not `Sync`: the cache lives in a `RefCell`, matching the single-threaded
/// populate-then-read usage of a store.
#[derive(Debug)]
pub struct CachingHasher<H> {
    inner: H,
    cache: RefCell<HashMap<String, KeyHash>>,
}

impl<H: KeyHasher> CachingHasher<H> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct names hashed so far.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<H: KeyHasher> KeyHasher for CachingHasher<H> {
    fn hash(&self, name: &str) -> KeyHash {
        if let Some(key) = self.cache.borrow().get(name) {
            return *key;
        }
        let key = self.inner.hash(name);
        self.cache.borrow_mut().insert(name.to_string(), key);
        key
    }
}
