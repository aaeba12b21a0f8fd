//! Main logger implementation

use super::{
    attributes::{Attributes, ERROR_KEY},
    error::Result,
    event::{LogEvent, LEVEL_KEY, TIMESTAMP_KEY, TYPE_KEY},
    level::Level,
    store::Store,
    stream::{EventStream, StreamOptions},
};
use crate::observability::{log_debug, log_trace};
use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Construction options a host may load from its own configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerOptions {
    /// Minimum level; `debug` when absent
    #[serde(default)]
    pub level: Option<Level>,
}

/// Leveled, structured event emitter.
///
/// A logger carries an immutable set of default attributes merged into
/// every event, and a mutable minimum level. [`Logger::namespace`] derives
/// child loggers that share the same store but extend the defaults.
///
/// # Example
///
/// ```
/// use jog::prelude::*;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// let log = Logger::new(store.clone());
///
/// let log = log.namespace(attrs! { "uid" => "tobi" });
/// log.info("video viewed", attrs! { "vid" => "abc" })?;
///
/// let event = &store.events()[0];
/// assert_eq!(event.level(), Some("info"));
/// assert_eq!(event.get("uid").unwrap(), "tobi");
/// # Ok::<(), jog::JogError>(())
/// ```
pub struct Logger {
    store: Arc<dyn Store>,
    defaults: Attributes,
    level: RwLock<Level>,
}

impl Logger {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_options(store, Attributes::new(), LoggerOptions::default())
    }

    #[must_use]
    pub fn with_defaults(store: Arc<dyn Store>, defaults: impl Into<Attributes>) -> Self {
        Self::with_options(store, defaults, LoggerOptions::default())
    }

    #[must_use]
    pub fn with_options(
        store: Arc<dyn Store>,
        defaults: impl Into<Attributes>,
        options: LoggerOptions,
    ) -> Self {
        Self {
            store,
            defaults: defaults.into(),
            level: RwLock::new(options.level.unwrap_or_default()),
        }
    }

    /// Current minimum level
    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    /// Set the minimum level by name.
    ///
    /// Fails with [`JogError::InvalidLevel`](super::JogError::InvalidLevel)
    /// for anything but `debug`, `info`, `warn` or `error`, leaving the
    /// current level untouched.
    pub fn set_level_name(&self, name: &str) -> Result<()> {
        let level = name.parse::<Level>()?;
        self.set_level(level);
        Ok(())
    }

    /// Default attributes merged into every event
    pub fn defaults(&self) -> &Attributes {
        &self.defaults
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Whether `self` and `other` are the same logger instance
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        std::ptr::eq(self, other)
    }

    /// Derive a child logger.
    ///
    /// The child's defaults are `attrs` plus every parent default whose key
    /// `attrs` does not already have. The child shares the store and starts
    /// at the default level regardless of the parent's.
    #[must_use]
    pub fn namespace(&self, attrs: impl Into<Attributes>) -> Logger {
        let mut defaults = attrs.into();
        defaults.inherit(&self.defaults);

        Logger {
            store: Arc::clone(&self.store),
            defaults,
            level: RwLock::new(Level::default()),
        }
    }

    /// Write one event.
    ///
    /// `level` that is not a known level name skips filtering and is always
    /// written. Store failures are returned unchanged; a filtered event is
    /// not an error.
    pub fn write(
        &self,
        level: impl AsRef<str>,
        kind: &str,
        attrs: impl Into<Attributes>,
    ) -> Result<&Self> {
        let level = level.as_ref();

        if let Some(severity) = Level::from_name(level) {
            if !severity.passes(self.level()) {
                log_trace!(event = "filtered", event_level = level, kind);
                return Ok(self);
            }
        }

        let event = self.enrich(level, kind, attrs.into());
        if let Err(err) = self.store.add(event) {
            log_debug!(event = "store_add_failed", store = self.store.name(), error = %err);
            return Err(err);
        }
        Ok(self)
    }

    fn enrich(&self, level: &str, kind: &str, mut attrs: Attributes) -> LogEvent {
        attrs.insert(LEVEL_KEY, level);
        attrs.insert(TYPE_KEY, kind);

        if attrs.get(TIMESTAMP_KEY).map_or(true, is_falsy) {
            attrs.insert(TIMESTAMP_KEY, Utc::now().timestamp_millis());
        }

        // defaults win over caller attributes
        attrs.overwrite_with(&self.defaults);

        let (mut fields, error, origin) = attrs.into_parts();

        // a truthy plain `error` is the candidate and is never an error value
        if fields.get(ERROR_KEY).map_or(true, is_falsy) {
            if let Some(captured) = error.or(origin) {
                fields.insert(ERROR_KEY.to_string(), captured.to_json_value());
            }
        }

        LogEvent::from_map(fields)
    }

    pub fn debug(&self, kind: &str, attrs: impl Into<Attributes>) -> Result<()> {
        self.write(Level::Debug, kind, attrs).map(|_| ())
    }

    pub fn info(&self, kind: &str, attrs: impl Into<Attributes>) -> Result<()> {
        self.write(Level::Info, kind, attrs).map(|_| ())
    }

    pub fn warn(&self, kind: &str, attrs: impl Into<Attributes>) -> Result<()> {
        self.write(Level::Warn, kind, attrs).map(|_| ())
    }

    pub fn error(&self, kind: &str, attrs: impl Into<Attributes>) -> Result<()> {
        self.write(Level::Error, kind, attrs).map(|_| ())
    }

    /// Stream events from the store, polling every 2000 ms unless
    /// `options.interval` says otherwise.
    pub fn stream(&self, options: StreamOptions) -> Result<EventStream> {
        self.store.stream(options.with_default_interval())
    }

    /// Erase everything in the store
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("store", &self.store.name())
            .field("defaults", &self.defaults)
            .field("level", &self.level())
            .finish()
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use jog::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder(Arc::new(MemoryStore::new()))
///     .level(Level::Info)
///     .field("service", "api")
///     .build();
///
/// assert_eq!(logger.level(), Level::Info);
/// ```
pub struct LoggerBuilder {
    store: Arc<dyn Store>,
    defaults: Attributes,
    level: Level,
}

impl LoggerBuilder {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            defaults: Attributes::new(),
            level: Level::default(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replace the default attributes
    #[must_use = "builder methods return a new value"]
    pub fn defaults(mut self, defaults: impl Into<Attributes>) -> Self {
        self.defaults = defaults.into();
        self
    }

    /// Add one default attribute
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.defaults.insert(key, value);
        self
    }

    /// Apply options loaded from configuration
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        if let Some(level) = options.level {
            self.level = level;
        }
        self
    }

    pub fn build(self) -> Logger {
        Logger::with_options(
            self.store,
            self.defaults,
            LoggerOptions {
                level: Some(self.level),
            },
        )
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(store: Arc<dyn Store>) -> LoggerBuilder {
        LoggerBuilder::new(store)
    }
}
