//! The JSON value model.
//!
//! [`Value`] is a closed sum type over the seven JSON shapes this crate
//! understands. Integers and doubles are separate variants: a numeral
//! lexeme containing `.`, `e`, or `E` parses as [`Value::Double`], anything
//! else as [`Value::Integer`]. A parsed tree exclusively owns all its
//! descendants and is destroyed as a unit.

use std::collections::BTreeMap;
use std::ops::Index;

/// A JSON value.
///
/// Objects use `BTreeMap` so that key iteration — and therefore the
/// generator's canonical text — is deterministic. Duplicate keys in the
/// input overwrite: last write wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`
    #[default]
    Null,
    /// JSON `true`/`false`
    Bool(bool),
    /// A numeral without `.`, `e`, or `E`, as a 64-bit signed integer
    Integer(i64),
    /// A numeral with `.`, `e`, or `E`, as a 64-bit float
    Double(f64),
    /// JSON string
    String(String),
    /// JSON array, elements in parse order
    Array(Vec<Value>),
    /// JSON object, keys unique and sorted
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns true if this is a double.
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean value if this is a `Bool`, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value if this is an `Integer`, `None` otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The float value if this is a `Double`, `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// The string slice if this is a `String`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element slice if this is an `Array`, `None` otherwise.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The key-value map if this is an `Object`, `None` otherwise.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the active variant, used in contract-violation panics.
    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
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

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

/// Positional access into an `Array` value.
///
/// Indexing any other variant, or an index outside `[0, len)`, is a
/// programming-contract violation and panics. It never coerces or returns
/// a default.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => items
                .get(index)
                .unwrap_or_else(|| panic!("index {index} out of range for array of length {}", items.len())),
            other => panic!("cannot index {} value with a usize", other.type_name()),
        }
    }
}

/// Keyed access into an `Object` value.
///
/// Indexing any other variant, or an absent key, panics — the same access
/// contract as positional indexing.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Object(map) => map
                .get(key)
                .unwrap_or_else(|| panic!("key {key:?} not found in object")),
            other => panic!("cannot index {} value with a string key", other.type_name()),
        }
    }
}
