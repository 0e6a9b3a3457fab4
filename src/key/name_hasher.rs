//! Default name hasher.
//!
//! A 16-bit shift-xor over the UTF-8 bytes of the name, widened to
//! [`KeyHash`]. Keys always fall in `0..=65535`; with so few buckets,
//! collisions between real property names are possible.

use std::sync::OnceLock;

use tracing::debug;

use super::{KeyHash, KeyHasher};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Hash a property name.
///
/// For each byte `c`: `v ^= c | (v << 7)`, truncated to 16 bits. Bytes are
/// sign-extended first, as the C `char` this key scheme was defined on.
pub fn name_key(name: &str) -> KeyHash {
    let mut val: u16 = 0;
    for &byte in name.as_bytes() {
        let c = i32::from(byte as i8);
        val ^= (c | (i32::from(val) << 7)) as u16;
    }
    KeyHash::from(val)
}

/// The default [`KeyHasher`], computing [`name_key`].
///
/// Only obtainable through [`initialize`](Self::initialize), so every holder
/// has gone through the one-time setup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameHasher {
    _initialized: (),
}

impl NameHasher {
    /// One-time initialization. Idempotent; later calls return immediately.
    pub fn initialize() -> Self {
        INITIALIZED.get_or_init(|| {
            debug!(probe = name_key("result"), "name hasher initialized");
        });
        Self { _initialized: () }
    }
}

impl KeyHasher for NameHasher {
    fn hash(&self, name: &str) -> KeyHash {
        name_key(name)
    }
}
