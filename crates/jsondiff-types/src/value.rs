use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A decoded JSON object.
///
/// Backed by serde_json's order-preserving map, so iteration yields keys in
/// the order they appeared in the source text.
pub type Document = serde_json::Map<String, Value>;

/// The dynamic category of a [`Value`].
///
/// Two values are only compared by content when they share a category.
/// Integers and floats are both `Number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Document,
}

impl ValueKind {
    /// Category of the given value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Document,
        }
    }

    /// Lowercase name, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys of a document, in document order.
pub fn document_keys(doc: &Document) -> Vec<&str> {
    doc.keys().map(String::as_str).collect()
}

/// Compare two values by content.
///
/// Numbers compare numerically, so `1` equals `1.0`. Arrays are equal when
/// they have the same length and pairwise-equal elements. Objects are equal
/// when they hold the same keys with equal values, regardless of key order.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, l)| y.get(k).is_some_and(|r| values_equal(l, r)))
        }
        _ => false,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    match (as_integer(x), as_integer(y)) {
        (Some(a), Some(b)) => a == b,
        (Some(i), None) => y.as_f64().is_some_and(|f| float_equals_integer(f, i)),
        (None, Some(i)) => x.as_f64().is_some_and(|f| float_equals_integer(f, i)),
        (None, None) => matches!((x.as_f64(), y.as_f64()), (Some(a), Some(b)) if a == b),
    }
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Exact comparison; f64 cannot represent every i64/u64, so no lossy cast of `i`.
fn float_equals_integer(f: f64, i: i128) -> bool {
    // Both bounds are powers of two and therefore exact in f64.
    let bound = 2f64.powi(127);
    f.fract() == 0.0 && f >= -bound && f < bound && f as i128 == i
}
