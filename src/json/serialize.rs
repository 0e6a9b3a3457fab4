//! Debug JSON rendering.
//!
//! Output is display text, not validated JSON:
//!
//! - strings are quoted but never escaped, so embedded quotes, backslashes
//!   and control characters pass through untouched
//! - [`append_key`] always ends with a comma; callers trim the last one and
//!   close the object themselves
//! - nested objects have no JSON form and render as `<json-object>`

use super::types::Value;

/// Render a value as JSON-like text.
pub fn to_json(value: &Value) -> String {
    let mut output = String::new();
    serialize_value(value, &mut output);
    output
}

/// Append `"<key>":<to_json(value)>,` to `buffer`.
pub fn append_key(buffer: &mut String, key: &str, value: &Value) {
    buffer.push('"');
    buffer.push_str(key);
    buffer.push_str("\":");
    serialize_value(value, buffer);
    buffer.push(',');
}

fn serialize_value(value: &Value, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Int(n) => output.push_str(&n.to_string()),
        Value::Long(n) => output.push_str(&n.to_string()),
        Value::BigInt(n) => {
            output.push_str("\"0x");
            output.push_str(&n.to_str_radix(16));
            output.push('"');
        }
        Value::String(s) => {
            output.push('"');
            output.push_str(s);
            output.push('"');
        }
        Value::Array(items) => serialize_array(items, output),
        Value::Object(store) => output.push_str(&store.to_string()),
    }
}

fn serialize_array(items: &[Value], output: &mut String) {
    output.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_value(item, output);
    }
    output.push(']');
}
