//! Compact JSON generator.
//!
//! [`serialize`] is a total, pure recursive walk from a [`Value`] tree to
//! its canonical text: no inserted whitespace, object keys in sorted order,
//! strings escaped with the same basic set the parser decodes. Non-finite
//! doubles have no JSON representation and are emitted as `null`.

use crate::value::Value;

/// Serialize a [`Value`] tree to compact JSON text.
///
/// ```
/// use mjson_core::{serialize, Value};
///
/// let value = Value::Array(vec![Value::Integer(1), Value::Bool(true)]);
/// assert_eq!(serialize(&value), "[1,true]");
/// ```
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Double(f) => write_double(*f, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(val, out);
            }
            out.push('}');
        }
    }
}

/// Emit a double as the shortest decimal text that reads back to the same
/// bits. Whole values get a `.0` suffix so the lexeme re-parses as a
/// `Double`, not an `Integer`.
fn write_double(f: f64, out: &mut String) {
    if !f.is_finite() {
        out.push_str("null");
        return;
    }
    let text = f.to_string();
    let needs_point = !text.contains('.');
    out.push_str(&text);
    if needs_point {
        out.push_str(".0");
    }
}

/// Emit a quoted string, escaping the set the parser decodes. Other
/// characters, multi-byte UTF-8 included, pass through verbatim.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
