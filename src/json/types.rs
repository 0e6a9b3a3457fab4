//! Dynamically-typed JSON values.
//!
//! A [`Value`] is what a deserializer stores under a hashed key. Numbers keep
//! the width they were decoded with (32-bit, 64-bit or arbitrary precision)
//! because the coercion and serializer rules depend on it.

use std::fmt;

use num_bigint::BigInt;

use super::store::ValueStore;

/// A JSON value as held by a [`ValueStore`].
///
/// Arrays are homogeneous in practice but this is not enforced, and their
/// elements may be `Null`. Nested objects are stores of their own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// JSON null, also the sentinel for a missing property
    #[default]
    Null,
    /// JSON boolean
    Bool(bool),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Long(i64),
    /// Arbitrary-precision signed integer
    BigInt(BigInt),
    /// String, stored unescaped
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Nested object, keyed by hash like its parent
    Object(ValueStore),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for any of the three integer widths.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Long(_) | Value::BigInt(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is a nested object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the nested store if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&ValueStore> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the type name as a string for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Long(_) => "long",
            Value::BigInt(_) => "biginteger",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Natural text representation.
///
/// Integers print in signed decimal and strings print raw. Arrays use a
/// bracketed, comma-space separated listing that is deliberately not JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(store) => write!(f, "{}", store),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<ValueStore> for Value {
    fn from(store: ValueStore) -> Self {
        Value::Object(store)
    }
}
