//! keyed-json - JSON values keyed by hashed property names.
//!
//! Properties live in a [`ValueStore`] under a 32-bit hash of their name
//! instead of the name itself. Reads go through an [`Accessor`], which hashes
//! the requested name and applies lenient coercions: hex-or-decimal numeric
//! text, `0x` hex rendering of integers, plain-text string arrays. A small
//! serializer renders values as (unescaped) JSON for logs and debugging.
//!
//! # Architecture
//!
//! - [`key`] - [`KeyHasher`] capability and the default [`NameHasher`]
//! - [`json`] - Values, the store, accessors, coercions, serializer
//! - [`bridge`] - Fills a store from a `serde_json` document
//! - [`error`] - Error codes
//!
//! # Limitations
//!
//! Key hashing may collide; colliding names silently share one slot. The
//! serializer does not escape strings and [`append_key`] always leaves a
//! trailing comma.

// Library code must not panic on caller input.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod bridge;
pub mod error;
pub mod json;
pub mod key;

// Re-export commonly used types
pub use error::{ErrorCode, KeyedResult};
pub use json::{append_key, to_json, Accessor, Limits, Value, ValueStore};
pub use key::{KeyHash, KeyHasher, NameHasher};
