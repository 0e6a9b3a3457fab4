//! Conformance tests for the store, coercions and serializer.
//!
//! Each section pins one documented behaviour, including the quirks that
//! callers rely on (second-character hex detection, hex scalars versus
//! plain-text array elements, unescaped strings, trailing commas).

use keyed_json::json::{
    append_key, as_big_integer, as_long, as_string, as_string_array, to_json, Accessor, Value,
    ValueStore,
};
use keyed_json::key::{name_key, CachingHasher, KeyHasher, NameHasher};
use keyed_json::ErrorCode;
use num_bigint::BigInt;

fn text(s: &str) -> Value {
    Value::from(s)
}

// ============================================================================
// Store: put/get
// ============================================================================

#[test]
fn store_get_returns_last_put() {
    let mut store = ValueStore::new();
    store.put(12, Value::Int(1));
    store.put(12, Value::from("two"));
    assert_eq!(store.get(12), &Value::from("two"));
}

#[test]
fn store_missing_key_is_null_sentinel() {
    let store = ValueStore::new();
    assert_eq!(store.get(0), &Value::Null);
}

#[test]
fn accessor_missing_property_never_fails() {
    let hasher = NameHasher::initialize();
    let store = ValueStore::new();
    let acc = Accessor::new(&store, &hasher);
    assert!(acc.get("nope").is_null());
    assert_eq!(acc.get_long("nope"), Ok(0));
    assert_eq!(acc.get_big_integer("nope"), Ok(BigInt::from(0)));
    assert_eq!(acc.get_string("nope"), None);
    assert_eq!(acc.get_string_array("nope"), None);
}

#[test]
fn accessor_uses_injected_hasher() {
    let by_length = |name: &str| name.len() as i32;
    let mut store = ValueStore::new();
    store.put(3, Value::Int(42));

    let acc = Accessor::new(&store, &by_length);
    assert_eq!(acc.get("abc"), &Value::Int(42));
    // Any other three-letter name collides onto the same slot.
    assert_eq!(acc.get("xyz"), &Value::Int(42));
}

#[test]
fn caching_hasher_is_transparent() {
    let hasher = CachingHasher::new(NameHasher::initialize());
    let mut store = ValueStore::new();
    store.put(name_key("result"), Value::from("0x1"));

    let acc = Accessor::new(&store, &hasher);
    assert_eq!(acc.get_long("result"), Ok(1));
    assert_eq!(acc.get_long("result"), Ok(1));
    assert_eq!(hasher.cached(), 1);
    assert_eq!(hasher.hash("result"), name_key("result"));
}

// ============================================================================
// as_long
// ============================================================================

#[test]
fn as_long_documented_examples() {
    assert_eq!(as_long(&text("0x1a")), Ok(26));
    assert_eq!(as_long(&text("26")), Ok(26));
    assert_eq!(as_long(&Value::Null), Ok(0));
}

#[test]
fn as_long_sign_before_x_fails() {
    assert_eq!(
        as_long(&text("-0x1a")),
        Err(ErrorCode::E100_NumberFormat("-0x1a".to_string()))
    );
}

#[test]
fn as_long_only_int_widens() {
    assert_eq!(as_long(&Value::Int(i32::MIN)), Ok(i64::from(i32::MIN)));
    assert_eq!(as_long(&Value::Long(99)), Ok(0));
    assert_eq!(as_long(&Value::Bool(true)), Ok(0));
}

#[test]
fn as_long_error_code() {
    let err = as_long(&text("twelve")).unwrap_err();
    assert_eq!(err.code(), 100);
    assert_eq!(err.name(), "E100_NumberFormat");
}

// ============================================================================
// as_big_integer
// ============================================================================

#[test]
fn as_big_integer_documented_examples() {
    assert_eq!(as_big_integer(&text("0xff")), Ok(BigInt::from(255)));
    assert_eq!(as_big_integer(&Value::Null), Ok(BigInt::from(0)));
}

#[test]
fn as_big_integer_beyond_64_bits() {
    let value = text("0x123456789abcdef0123456789abcdef");
    let expected = BigInt::parse_bytes(b"123456789abcdef0123456789abcdef", 16).unwrap();
    assert_eq!(as_big_integer(&value), Ok(expected));
    assert!(as_long(&value).is_err());
}

#[test]
fn as_big_integer_decimal_text() {
    assert_eq!(
        as_big_integer(&text("-100000000000000000000")),
        Ok(BigInt::parse_bytes(b"-100000000000000000000", 10).unwrap())
    );
}

// ============================================================================
// as_string / as_string_array asymmetry
// ============================================================================

#[test]
fn as_string_documented_examples() {
    assert_eq!(as_string(&Value::Int(10)).as_deref(), Some("0xa"));
    assert_eq!(as_string(&Value::Null), None);
}

#[test]
fn as_string_all_integer_widths_are_hex() {
    assert_eq!(as_string(&Value::Long(4096)).as_deref(), Some("0x1000"));
    assert_eq!(
        as_string(&Value::BigInt(BigInt::from(26))).as_deref(),
        Some("0x1a")
    );
}

#[test]
fn as_string_array_documented_example() {
    let arr = Value::Array(vec![Value::Int(10), Value::Null]);
    assert_eq!(
        as_string_array(&arr),
        Some(vec![Some("10".to_string()), None])
    );
}

#[test]
fn scalar_and_array_paths_differ() {
    let ten = Value::Int(10);
    let arr = Value::Array(vec![ten.clone()]);
    assert_eq!(as_string(&ten).as_deref(), Some("0xa"));
    assert_eq!(as_string_array(&arr), Some(vec![Some("10".to_string())]));
}

// ============================================================================
// Serializer
// ============================================================================

#[test]
fn to_json_documented_array() {
    let arr = Value::Array(vec![Value::Int(1), text("a"), Value::Null]);
    assert_eq!(to_json(&arr), "[1,\"a\",null]");
}

#[test]
fn to_json_big_integer() {
    assert_eq!(to_json(&Value::BigInt(BigInt::from(255))), "\"0xff\"");
}

#[test]
fn to_json_strings_pass_through_unescaped() {
    assert_eq!(to_json(&text("say \"hi\"")), "\"say \"hi\"\"");
}

#[test]
fn append_key_documented_example() {
    let mut buf = String::from("{");
    append_key(&mut buf, "foo", &Value::Int(10));
    assert_eq!(buf, "{\"foo\":10,");
}

#[test]
fn append_key_builds_object_after_trim() {
    let hasher = NameHasher::initialize();
    let mut store = ValueStore::new();
    store.put(hasher.hash("hash"), Value::BigInt(BigInt::from(0xabcdef)));
    store.put(hasher.hash("ok"), Value::Bool(true));
    let acc = Accessor::new(&store, &hasher);

    let mut buf = String::from("{");
    for name in ["hash", "ok", "missing"] {
        append_key(&mut buf, name, acc.get(name));
    }
    assert!(buf.ends_with(','));
    buf.pop();
    buf.push('}');
    assert_eq!(buf, "{\"hash\":\"0xabcdef\",\"ok\":true,\"missing\":null}");
}
