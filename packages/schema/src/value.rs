//! # Property Values
//!
//! Components store their configuration in an open property bag: a map from
//! property name to a scalar value. The bag is what travels over the wire and
//! what the editor patches; typed records (see [`crate::props`]) are views
//! resolved from it.
//!
//! Values that are not scalars (objects, arrays, null), and integers too wide
//! for an f64, are kept verbatim in [`PropValue::Json`] so that documents
//! written by a newer schema survive a load/save cycle untouched.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Largest integer that an f64 represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// Non-scalar value preserved for forward compatibility
    Json(serde_json::Value),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            PropValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            PropValue::Text(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            PropValue::Number(n) => Some(*n != 0.0),
            PropValue::Json(_) => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, PropValue::Json(_))
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Text(s) => f.write_str(s),
            PropValue::Number(n) if is_exact_integer(*n) => write!(f, "{}", *n as i64),
            PropValue::Number(n) => write!(f, "{}", n),
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Json(v) => write!(f, "{}", v),
        }
    }
}

fn is_exact_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Text(s) => serializer.serialize_str(s),
            PropValue::Number(n) if is_exact_integer(*n) => serializer.serialize_i64(*n as i64),
            PropValue::Number(n) => serializer.serialize_f64(*n),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Json(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(PropValue::from(value))
    }
}

/// Integers beyond 2^53 that an f64 would round
fn is_wide_integer(n: &serde_json::Number) -> bool {
    match (n.as_i64(), n.as_u64()) {
        (Some(i), _) => i.unsigned_abs() > MAX_EXACT_INTEGER as u64,
        (None, Some(u)) => u > MAX_EXACT_INTEGER as u64,
        (None, None) => false,
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => PropValue::Text(s),
            serde_json::Value::Bool(b) => PropValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) if !is_wide_integer(&n) => PropValue::Number(f),
                _ => PropValue::Json(serde_json::Value::Number(n)),
            },
            other => PropValue::Json(other),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(f64::from(n))
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

/// Lenient conversion from a stored value into a typed field.
///
/// Returns `None` when the value cannot be coerced; callers fall back to the
/// field default.
pub trait FromProp: Sized {
    fn from_prop(value: &PropValue) -> Option<Self>;
}

/// Conversion from a typed field back into a stored value
pub trait IntoProp {
    fn into_prop(self) -> PropValue;
}

impl FromProp for String {
    fn from_prop(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Json(_) => None,
            other => Some(other.to_string()),
        }
    }
}

impl FromProp for f64 {
    fn from_prop(value: &PropValue) -> Option<Self> {
        value.as_f64().filter(|n| n.is_finite())
    }
}

impl FromProp for i64 {
    fn from_prop(value: &PropValue) -> Option<Self> {
        value.as_f64().filter(|n| n.is_finite()).map(|n| n.trunc() as i64)
    }
}

impl FromProp for bool {
    fn from_prop(value: &PropValue) -> Option<Self> {
        value.as_bool()
    }
}

impl<T: Into<PropValue>> IntoProp for T {
    fn into_prop(self) -> PropValue {
        self.into()
    }
}

/// Open mapping from property name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropBag(BTreeMap<String, PropValue>);

impl PropBag {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PropValue> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Shallow merge: every key in `patch` overwrites the same key here,
    /// keys absent from `patch` are left untouched.
    pub fn merge(&mut self, patch: &PropBag) {
        for (key, value) in patch.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Returns the merged bag without modifying `self`
    pub fn merged(&self, patch: &PropBag) -> PropBag {
        let mut out = self.clone();
        out.merge(patch);
        out
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }
}

impl FromIterator<(String, PropValue)> for PropBag {
    fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PropBag {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = btree_map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
