//! Name-based access to a [`ValueStore`].

use num_bigint::BigInt;
use tracing::trace;

use super::coerce;
use super::store::{ValueStore, NULL};
use super::types::Value;
use crate::error::KeyedResult;
use crate::key::KeyHasher;

/// Looks properties up by name, hashing each name on every call.
///
/// Borrowing both the store and the hasher keeps the accessor cheap to create
/// for nested objects (see [`get_object`](Self::get_object)).
pub struct Accessor<'a, H: KeyHasher + ?Sized> {
    store: &'a ValueStore,
    hasher: &'a H,
}

impl<'a, H: KeyHasher + ?Sized> Accessor<'a, H> {
    /// Create an accessor over `store` using `hasher` for names.
    pub fn new(store: &'a ValueStore, hasher: &'a H) -> Self {
        Self { store, hasher }
    }

    /// The underlying store.
    pub fn store(&self) -> &'a ValueStore {
        self.store
    }

    /// Raw value of property `name`, or [`Value::Null`] when absent.
    pub fn get(&self, name: &str) -> &'a Value {
        let key = self.hasher.hash(name);
        let value = self.store.get(key);
        trace!(property = name, key, kind = value.type_name(), "property lookup");
        value
    }

    /// Property `name` as `i64`. See [`coerce::as_long`].
    pub fn get_long(&self, name: &str) -> KeyedResult<i64> {
        coerce::as_long(self.get(name))
    }

    /// Property `name` as [`BigInt`]. See [`coerce::as_big_integer`].
    pub fn get_big_integer(&self, name: &str) -> KeyedResult<BigInt> {
        coerce::as_big_integer(self.get(name))
    }

    /// Property `name` as a string, integers in `0x` hex. See [`coerce::as_string`].
    pub fn get_string(&self, name: &str) -> Option<String> {
        coerce::as_string(self.get(name))
    }

    /// Property `name` as plain-text elements. See [`coerce::as_string_array`].
    pub fn get_string_array(&self, name: &str) -> Option<Vec<Option<String>>> {
        coerce::as_string_array(self.get(name))
    }

    /// Accessor for the nested object stored under `name`, sharing this hasher.
    pub fn get_object(&self, name: &str) -> Option<Accessor<'a, H>> {
        self.get(name)
            .as_object()
            .map(|store| Accessor::new(store, self.hasher))
    }

    /// Follow a dot-separated path through nested objects.
    ///
    /// Every segment but the last must name an object; otherwise the result
    /// is [`Value::Null`].
    pub fn get_path(&self, path: &str) -> &'a Value {
        let mut segments = path.split('.');
        let last = segments.next_back().unwrap_or_default();
        let mut current = *self;
        for segment in segments {
            match current.get_object(segment) {
                Some(next) => current = next,
                None => return &NULL,
            }
        }
        current.get(last)
    }
}

impl<H: KeyHasher + ?Sized> Clone for Accessor<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: KeyHasher + ?Sized> Copy for Accessor<'_, H> {}
