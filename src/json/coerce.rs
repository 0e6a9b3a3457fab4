//! Lenient conversions from [`Value`] to Rust types.
//!
//! The rules are deliberately forgiving: a type that does not fit the target
//! degrades to a default (`0` or `None`). The single failure is numeric text
//! that does not parse, reported as [`ErrorCode::E100_NumberFormat`].
//!
//! Numeric text is hex when its *second* character is `x` and more follows
//! (`"0x1a"`, but also `"1x1a"`); anything else is decimal. A sign before
//! the `x` therefore does not work (`"-0x1a"` fails) while a sign after it
//! does (`"0x-1a"` is -26).
//!
//! Only ASCII digits are accepted; Unicode decimal digits such as `"٣"` are
//! malformed text here, unlike the JVM parsers this convention comes from.
//!
//! Scalars and array elements are stringified differently: [`as_string`]
//! renders integers as `0x` hex, [`as_string_array`] renders every element
//! as plain text.

use num_bigint::BigInt;
use num_traits::{Num, Zero};

use super::types::Value;
use crate::error::{ErrorCode, KeyedResult};

/// Split numeric text into its digits and radix.
fn split_radix(text: &str) -> (&str, u32) {
    let mut chars = text.chars();
    if let (Some(first), Some('x')) = (chars.next(), chars.next()) {
        // Lengths and positions count UTF-16 units.
        if first.len_utf16() == 1 && text.encode_utf16().count() > 2 {
            return (&text[first.len_utf8() + 1..], 16);
        }
    }
    (text, 10)
}

fn number_format(text: &str) -> ErrorCode {
    ErrorCode::E100_NumberFormat(text.to_string())
}

/// Parse numeric text as a signed 64-bit integer.
pub fn parse_long(text: &str) -> KeyedResult<i64> {
    let (digits, radix) = split_radix(text);
    i64::from_str_radix(digits, radix).map_err(|_| number_format(text))
}

/// Parse numeric text as an arbitrary-precision integer.
pub fn parse_big_integer(text: &str) -> KeyedResult<BigInt> {
    let (digits, radix) = split_radix(text);
    // num-bigint tolerates digit-group underscores; plain numeric text does not.
    if digits.contains('_') {
        return Err(number_format(text));
    }
    BigInt::from_str_radix(digits, radix).map_err(|_| number_format(text))
}

/// Coerce to `i64`.
///
/// Null gives 0, strings are parsed, 32-bit integers widen. Every other
/// type, 64-bit and big integers included, gives 0.
pub fn as_long(value: &Value) -> KeyedResult<i64> {
    match value {
        Value::String(s) => parse_long(s),
        Value::Int(n) => Ok(i64::from(*n)),
        Value::Null
        | Value::Bool(_)
        | Value::Long(_)
        | Value::BigInt(_)
        | Value::Array(_)
        | Value::Object(_) => Ok(0),
    }
}

/// Coerce to [`BigInt`]. Same shape as [`as_long`] at arbitrary precision.
pub fn as_big_integer(value: &Value) -> KeyedResult<BigInt> {
    match value {
        Value::String(s) => parse_big_integer(s),
        Value::Int(n) => Ok(BigInt::from(*n)),
        Value::Null
        | Value::Bool(_)
        | Value::Long(_)
        | Value::BigInt(_)
        | Value::Array(_)
        | Value::Object(_) => Ok(BigInt::zero()),
    }
}

/// Coerce to a string, rendering integers as `0x`-prefixed lowercase hex.
///
/// 32- and 64-bit integers use two's complement at their own width, so
/// `Int(-1)` is `0xffffffff`. Big integers keep their sign: `-255` is
/// `0x-ff`. Null stays `None`; anything else uses its plain text.
pub fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Int(n) => Some(format!("0x{:x}", n)),
        Value::Long(n) => Some(format!("0x{:x}", n)),
        Value::BigInt(n) => Some(format!("0x{}", n.to_str_radix(16))),
        Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => {
            Some(value.to_string())
        }
    }
}

/// Coerce an array to its elements' plain text, keeping nulls.
///
/// Elements are not hex-rendered: `[Int(10)]` gives `["10"]`. Anything that
/// is not an array gives `None`.
pub fn as_string_array(value: &Value) -> Option<Vec<Option<String>>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect(),
        ),
        _ => None,
    }
}
