//! Populate a [`ValueStore`] from a `serde_json` document.
//!
//! `serde_json` does the decoding; this module walks the decoded tree and
//! feeds every field to [`ValueStore::put`] under its hashed name, choosing the
//! narrowest integer width that holds each number.
//!
//! # Requirements
//!
//! - Root must be an object (E120)
//! - Non-integer numbers are rejected (E121)
//! - E110/E111/E113/E114 from [`Limits`]

use num_bigint::BigInt;
use serde_json::Number;
use tracing::{debug, trace};

use crate::error::{ErrorCode, KeyedResult};
use crate::json::{Limits, Value, ValueStore};
use crate::key::KeyHasher;

type Map = serde_json::Map<String, serde_json::Value>;

/// Decode `input` and populate a store from its root object.
pub fn populate_from_slice<H: KeyHasher + ?Sized>(
    input: &[u8],
    hasher: &H,
    limits: Limits,
) -> KeyedResult<ValueStore> {
    if input.len() as u64 > limits.max_input_size {
        return Err(ErrorCode::E110_InputTooLarge(
            input.len() as u64,
            limits.max_input_size,
        ));
    }
    let doc: serde_json::Value =
        serde_json::from_slice(input).map_err(|e| ErrorCode::E120_InvalidJSON(e.to_string()))?;
    populate(&doc, hasher, limits)
}

/// Populate a store from an already decoded document.
pub fn populate<H: KeyHasher + ?Sized>(
    doc: &serde_json::Value,
    hasher: &H,
    limits: Limits,
) -> KeyedResult<ValueStore> {
    let map = match doc {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(ErrorCode::E120_InvalidJSON(format!(
                "root must be an object, got {}",
                kind(other)
            )))
        }
    };
    let store = Populator { hasher, limits }.object(map, 1)?;
    debug!(fields = store.len(), "store populated");
    Ok(store)
}

struct Populator<'h, H: ?Sized> {
    hasher: &'h H,
    limits: Limits,
}

impl<H: KeyHasher + ?Sized> Populator<'_, H> {
    fn enter(&self, depth: u64) -> KeyedResult<()> {
        if depth > self.limits.max_nesting_depth {
            return Err(ErrorCode::E111_NestingTooDeep(
                depth,
                self.limits.max_nesting_depth,
            ));
        }
        Ok(())
    }

    fn object(&self, map: &Map, depth: u64) -> KeyedResult<ValueStore> {
        self.enter(depth)?;
        if map.len() as u64 > self.limits.max_object_fields {
            return Err(ErrorCode::E113_TooManyFields(
                map.len() as u64,
                self.limits.max_object_fields,
            ));
        }

        let mut store = ValueStore::new();
        for (name, field) in map {
            let key = self.hasher.hash(name);
            trace!(property = name.as_str(), key, "put");
            store.put(key, self.value(field, depth)?);
        }
        Ok(store)
    }

    fn value(&self, value: &serde_json::Value, depth: u64) -> KeyedResult<Value> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => number(n)?,
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                self.enter(depth + 1)?;
                if items.len() as u64 > self.limits.max_array_length {
                    return Err(ErrorCode::E114_ArrayTooLong(
                        items.len() as u64,
                        self.limits.max_array_length,
                    ));
                }
                Value::Array(
                    items
                        .iter()
                        .map(|item| self.value(item, depth + 1))
                        .collect::<KeyedResult<Vec<_>>>()?,
                )
            }
            serde_json::Value::Object(map) => Value::Object(self.object(map, depth + 1)?),
        })
    }
}

/// Narrowest integer variant holding `n`.
fn number(n: &Number) -> KeyedResult<Value> {
    if let Some(v) = n.as_i64() {
        return Ok(match i32::try_from(v) {
            Ok(small) => Value::Int(small),
            Err(_) => Value::Long(v),
        });
    }
    match n.as_u64() {
        Some(v) => Ok(Value::BigInt(BigInt::from(v))),
        None => Err(ErrorCode::E121_UnsupportedNumber(n.to_string())),
    }
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
