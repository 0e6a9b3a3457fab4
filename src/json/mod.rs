//! Hash-keyed JSON values.
//!
//! # Architecture
//!
//! - [`types`] - The [`Value`] sum type
//! - [`store`] - [`ValueStore`], values keyed by hashed property name
//! - [`accessor`] - [`Accessor`], name-based lookup and typed getters
//! - [`coerce`] - Lenient conversions to `i64`, `BigInt`, strings
//! - [`serialize`] - Non-escaping debug JSON output
//! - [`limits`] - Size limits for population
//!
//! # Example
//!
//! ```
//! use keyed_json::json::{append_key, to_json, Accessor, Value, ValueStore};
//! use keyed_json::key::{KeyHasher, NameHasher};
//!
//! let hasher = NameHasher::initialize();
//! let mut store = ValueStore::new();
//! store.put(hasher.hash("gasPrice"), Value::from("0x3b9aca00"));
//! store.put(hasher.hash("nonce"), Value::Int(10));
//!
//! let tx = Accessor::new(&store, &hasher);
//! assert_eq!(tx.get_long("gasPrice").unwrap(), 1_000_000_000);
//! assert_eq!(tx.get_string("nonce").as_deref(), Some("0xa"));
//!
//! let mut out = String::new();
//! append_key(&mut out, "nonce", tx.get("nonce"));
//! assert_eq!(out, "\"nonce\":10,");
//! assert_eq!(to_json(&Value::Array(vec![Value::Int(1), Value::Null])), "[1,null]");
//! ```

pub mod accessor;
pub mod coerce;
pub mod limits;
pub mod serialize;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use accessor::Accessor;
pub use coerce::{as_big_integer, as_long, as_string, as_string_array};
pub use limits::{Limits, SERDE_RECURSION_LIMIT};
pub use serialize::{append_key, to_json};
pub use store::ValueStore;
pub use types::Value;
