//! Log event handed to stores

use super::attributes::ERROR_KEY;
use super::error::Result;
use super::failure::CapturedError;
use super::level::Level;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const LEVEL_KEY: &str = "level";
pub const TYPE_KEY: &str = "type";
pub const TIMESTAMP_KEY: &str = "timestamp";

/// A written event: an ordered map of attribute name to JSON value.
///
/// Every event produced by a logger carries `level`, `type` and `timestamp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEvent(Map<String, Value>);

impl LogEvent {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn level(&self) -> Option<&str> {
        self.0.get(LEVEL_KEY).and_then(Value::as_str)
    }

    /// Parsed severity; `None` for custom level names
    pub fn severity(&self) -> Option<Level> {
        self.level().and_then(|name| name.parse().ok())
    }

    /// The event's `type` label
    pub fn kind(&self) -> Option<&str> {
        self.0.get(TYPE_KEY).and_then(Value::as_str)
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp(&self) -> Option<i64> {
        self.0.get(TIMESTAMP_KEY).and_then(Value::as_i64)
    }

    /// Normalized error, when `error` holds a `{stack, message}` object
    pub fn error(&self) -> Option<CapturedError> {
        let value = self.0.get(ERROR_KEY)?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Serialize to a single-line JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

impl From<LogEvent> for Value {
    fn from(event: LogEvent) -> Self {
        Value::Object(event.0)
    }
}
