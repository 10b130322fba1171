//! Record - one content row as handed over by the caller
//!
//! Values are kept as JSON so exported rows deserialise without a schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field name to value mapping
///
/// Must carry a `type` discriminant; most content types also read `id`.
///
/// # Examples
/// ```
/// use contracts::Record;
///
/// let record = Record::from_iter([("type", "hyperlink"), ("url", "https://example.com")]);
/// assert_eq!(record.type_key(), Some("hyperlink"));
/// assert_eq!(record.text("url").as_deref(), Some("https://example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the record for chaining
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Raw value; `null` is reported as absent
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Scalar field converted to text
    ///
    /// Strings verbatim, numbers in decimal, `true` as `"1"`, `false` as `""`.
    /// Absent, `null`, arrays and objects yield `None`.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(true) => Some("1".to_string()),
            Value::Bool(false) => Some(String::new()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Whether a field holds a non-empty value
    ///
    /// Absent, `null`, `""`, `"0"`, `0`, `false` and empty arrays/objects
    /// count as empty.
    pub fn is_filled(&self, field: &str) -> bool {
        match self.get(field) {
            None => false,
            Some(Value::String(s)) => !(s.is_empty() || s == "0"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0),
            Some(Value::Bool(b)) => *b,
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
            Some(Value::Null) => false,
        }
    }

    /// Text of a field only when it is filled
    pub fn filled_text(&self, field: &str) -> Option<String> {
        if self.is_filled(field) {
            self.text(field)
        } else {
            None
        }
    }

    /// The `type` discriminant, when it is a string
    pub fn type_key(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
