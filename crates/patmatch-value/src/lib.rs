//! Dynamic value model for patmatch.
//!
//! Provides:
//! - [`Value`]: numbers, strings, booleans, null, arrays and string-keyed objects
//! - [`Structured`]: the access trait the matcher is generic over, implemented
//!   for [`Value`] and (with the `json` feature) for `serde_json::Value`
//! - Typed accessors returning [`ValueError`] for use inside match callbacks
//!
//! # Example
//!
//! ```
//! use patmatch_value::{Structured, Value};
//!
//! let shape = Value::object([
//!     ("type", Value::from("circle")),
//!     ("radius", Value::from(5.0)),
//! ]);
//!
//! assert_eq!(shape.get("radius").unwrap().as_number().unwrap(), 5.0);
//! assert!(shape.field("missing").is_none());
//! assert!(Value::Null.field("type").is_none());
//! ```

use std::collections::HashMap;
use thiserror::Error;

#[cfg(feature = "json")]
mod json;

// ============ Value Types ============

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
    #[default]
    Null,
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },
    #[error("key not found: {0}")]
    KeyNotFound(String),
    #[error("index out of bounds: {index} (len: {len})")]
    IndexOutOfBounds { index: i64, len: usize },
}

impl Value {
    /// Builds an object from `(key, value)` pairs. Later duplicates win.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.type_error("bool")),
        }
    }

    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(self.type_error("number")),
        }
    }

    pub fn as_string(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.type_error("string")),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], ValueError> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.type_error("array")),
        }
    }

    pub fn as_object(&self) -> Result<&HashMap<String, Value>, ValueError> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(self.type_error("object")),
        }
    }

    /// Looks up `key` on an object.
    pub fn get(&self, key: &str) -> Result<&Value, ValueError> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| ValueError::KeyNotFound(key.to_string()))
    }

    /// Indexes into an array. Negative indices count from the end: -1 is the
    /// last element.
    pub fn index(&self, i: i64) -> Result<&Value, ValueError> {
        let arr = self.as_array()?;
        let out_of_bounds = ValueError::IndexOutOfBounds {
            index: i,
            len: arr.len(),
        };
        let actual_index = if i < 0 {
            let neg_idx = i.unsigned_abs() as usize;
            if neg_idx > arr.len() {
                return Err(out_of_bounds);
            }
            arr.len() - neg_idx
        } else {
            i as usize
        };
        arr.get(actual_index).ok_or(out_of_bounds)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn type_error(&self, expected: &'static str) -> ValueError {
        ValueError::TypeError {
            expected,
            got: self.type_name(),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
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

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

// ============ Structured Access ============

/// Structural view of a dynamic value.
///
/// The matcher only ever reads values through this trait, so any dynamic
/// document type can be matched by implementing it. Every method is total:
/// a value that does not support an access answers `None`.
pub trait Structured: Sized {
    /// Keyed access. `None` if the value is not key-accessible or lacks `key`.
    fn field(&self, key: &str) -> Option<&Self>;

    /// The elements of an array-shaped value.
    fn elements(&self) -> Option<&[Self]>;

    fn as_text(&self) -> Option<&str> {
        None
    }

    fn as_f64(&self) -> Option<f64> {
        None
    }

    /// One of `"number"`, `"string"`, `"bool"`, `"null"`, `"array"`, `"object"`.
    fn kind(&self) -> &'static str;
}

/// Resolves a string key against a slice, the way keyed access works on
/// arrays in dynamic languages (`"0"` is the first element). Only canonical
/// indices resolve: `"01"` and `"+1"` do not.
pub fn index_key<'a, T>(items: &'a [T], key: &str) -> Option<&'a T> {
    let i = key.parse::<usize>().ok()?;
    if i.to_string() != key {
        return None;
    }
    items.get(i)
}

impl Structured for Value {
    fn field(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(o) => o.get(key),
            Value::Array(a) => index_key(a, key),
            _ => None,
        }
    }

    fn elements(&self) -> Option<&[Self]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        self.type_name()
    }
}
