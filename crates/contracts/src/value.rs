//! PhpValue - decoded form of a serialized field
//!
//! Mirrors the value model of the `serialize()` text format stored in
//! content columns: scalars plus ordered arrays with integer or string keys.

use std::fmt;

/// Array key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhpKey {
    Int(i64),
    Str(String),
}

impl PhpKey {
    /// Build a key from a string, normalising canonical decimal integers
    /// (`"0"`, `"-7"`) to `Int` the way array keys are normalised.
    pub fn from_string(s: impl Into<String>) -> Self {
        let s = s.into();
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Self::Int(n),
            _ => Self::Str(s),
        }
    }
}

impl From<i64> for PhpKey {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for PhpKey {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl fmt::Display for PhpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Decoded value
#[derive(Debug, Clone, PartialEq)]
pub enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Ordered key/value pairs
    Array(Vec<(PhpKey, PhpValue)>),
}

impl PhpValue {
    /// Build a list (keys 0..n) from values
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PhpValue>,
    {
        Self::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (PhpKey::Int(i as i64), v.into()))
                .collect(),
        )
    }

    pub fn as_array(&self) -> Option<&[(PhpKey, PhpValue)]> {
        match self {
            Self::Array(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up an array entry by key
    ///
    /// Returns `None` for non-arrays.
    pub fn get(&self, key: impl Into<PhpKey>) -> Option<&PhpValue> {
        let key = key.into();
        self.as_array()?
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Array values in insertion order, keys dropped
    pub fn values(&self) -> Option<impl Iterator<Item = &PhpValue>> {
        self.as_array().map(|entries| entries.iter().map(|(_, v)| v))
    }

    /// Short type name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
        }
    }
}

/// String conversion used when values are joined into a description
impl fmt::Display for PhpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Bool(false) => Ok(()),
            Self::Bool(true) => f.write_str("1"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) if x.is_nan() => f.write_str("NAN"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "INF" } else { "-INF" })
            }
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Array(_) => f.write_str("Array"),
        }
    }
}

impl From<&str> for PhpValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PhpValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PhpValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<Vec<PhpValue>> for PhpValue {
    fn from(items: Vec<PhpValue>) -> Self {
        Self::list(items)
    }
}

/// Conversion for fields that arrive already structured (JSON arrays/objects)
impl From<&serde_json::Value> for PhpValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::list(items.iter().map(PhpValue::from)),
            Value::Object(map) => Self::Array(
                map.iter()
                    .map(|(k, v)| (PhpKey::from_string(k.as_str()), PhpValue::from(v)))
                    .collect(),
            ),
        }
    }
}
