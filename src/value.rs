// src/value.rs
//! The recursive value model the transform engine operates over
//!
//! A closed JSON-like union. Conversion to and from `serde_json::Value` is
//! the host boundary; anything a plain JSON document cannot carry stays
//! outside. The one hole an `f64` leaves open — NaN and the infinities,
//! which have no canonical JSON form — is treated as an unsupported value
//! and rejected by the traversal with the offending dot path.

use std::collections::BTreeMap;

use crate::core::paths::join_path;

/// Ordered field map of an object value
pub type Map = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Dot path of the first non-finite number in this subtree, if any.
    /// `base` is the path of the subtree root; array elements extend it
    /// with their index.
    pub(crate) fn find_non_finite(&self, base: &str) -> Option<String> {
        match self {
            Value::Number(n) if !n.is_finite() => Some(base.to_owned()),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .find_map(|(i, v)| v.find_non_finite(&join_path(base, &i.to_string()))),
            Value::Object(map) => map
                .iter()
                .find_map(|(k, v)| v.find_non_finite(&join_path(base, k))),
            _ => None,
        }
    }

    /// Lossless conversion into `serde_json::Value`; `None` when the
    /// subtree contains a non-finite number.
    pub fn to_json_value(&self) -> Option<serde_json::Value> {
        Some(match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(serde_json::Number::from_f64(*n)?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(Value::to_json_value)
                    .collect::<Option<Vec<_>>>()?,
            ),
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| Some((k.clone(), v.to_json_value()?)))
                    .collect::<Option<serde_json::Map<_, _>>>()?,
            ),
        })
    }

    /// Canonical JSON encoding of this value; `None` on non-finite numbers.
    pub fn canonical_json(&self) -> Option<String> {
        self.to_json_value().map(|v| v.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Numbers collapse to f64; integers beyond 2^53 lose precision
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
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

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
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

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}
