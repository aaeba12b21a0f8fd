//! Ordered attribute maps for events and logger defaults
//!
//! `Attributes` is what callers hand to `Logger::write` and what a logger
//! carries as its defaults. Values are plain JSON, except for errors: an
//! error attached with [`Attributes::with_error`] (or an attribute set that
//! *is* an error, see [`Attributes::from_failure`]) stays typed until the
//! event is written, where it is normalized to `{stack, message}`.

use super::error::JogError;
use super::failure::{CapturedError, Failure};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Key holding the normalized error object
pub const ERROR_KEY: &str = "error";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    fields: Map<String, Value>,
    /// Typed error stored under `error`
    error: Option<CapturedError>,
    /// Set when the whole attribute set was built from an error
    origin: Option<CapturedError>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute set that stands for an error value itself.
    ///
    /// Unless an `error` key is added later, the written event gets the
    /// failure's `{stack, message}` under `error`.
    pub fn from_failure<F: Failure + ?Sized>(failure: &F) -> Self {
        Self {
            origin: Some(CapturedError::capture(failure)),
            ..Self::default()
        }
    }

    /// Add a field to the attributes
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(key, value);
        self
    }

    /// Attach a typed error under `error`
    #[must_use]
    pub fn with_error<F: Failure + ?Sized>(mut self, failure: &F) -> Self {
        self.set_error(CapturedError::capture(failure));
        self
    }

    /// Insert a field, returning the previous JSON value for that key
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let key = key.into();
        if key == ERROR_KEY {
            self.error = None;
        }
        self.fields.insert(key, value.into())
    }

    pub fn set_error(&mut self, error: CapturedError) {
        self.fields.shift_remove(ERROR_KEY);
        self.error = Some(error);
    }

    /// JSON value stored under `key`; a typed error is not a JSON value yet
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Typed error stored under `error`, if any
    pub fn error(&self) -> Option<&CapturedError> {
        self.error.as_ref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key) || (key == ERROR_KEY && self.error.is_some())
    }

    pub fn len(&self) -> usize {
        self.fields.len() + usize::from(self.error.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// JSON fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .chain(self.error.as_ref().map(|_| ERROR_KEY))
    }

    /// Fill in every key of `parent` that `self` does not have.
    ///
    /// Keys already present always win.
    pub fn inherit(&mut self, parent: &Attributes) {
        for (key, value) in &parent.fields {
            if !self.contains_key(key) {
                self.fields.insert(key.clone(), value.clone());
            }
        }
        if let Some(error) = &parent.error {
            if !self.contains_key(ERROR_KEY) {
                self.error = Some(error.clone());
            }
        }
    }

    /// Copy every key of `overrides` onto `self`, replacing what is there.
    pub fn overwrite_with(&mut self, overrides: &Attributes) {
        for (key, value) in &overrides.fields {
            self.insert(key.clone(), value.clone());
        }
        if let Some(error) = &overrides.error {
            self.set_error(error.clone());
        }
    }

    pub(crate) fn into_parts(self) -> (Map<String, Value>, Option<CapturedError>, Option<CapturedError>) {
        (self.fields, self.error, self.origin)
    }

    /// Render as a JSON object, typed errors included in normalized form
    pub fn to_json_value(&self) -> Value {
        let mut map = self.fields.clone();
        if let Some(error) = &self.error {
            map.insert(ERROR_KEY.to_string(), error.to_json_value());
        }
        Value::Object(map)
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        let mut parts: Vec<String> = self
            .fields
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect();
        if let Some(error) = &self.error {
            parts.push(format!("{}={}", ERROR_KEY, error.message));
        }
        parts.join(" ")
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

impl From<()> for Attributes {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }
}

impl<K, V> From<Vec<(K, V)>> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

impl TryFrom<Value> for Attributes {
    type Error = JogError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(fields.into()),
            Value::Null => Ok(Self::new()),
            other => Err(JogError::other(format!(
                "attributes must be a JSON object, got {}",
                other
            ))),
        }
    }
}
