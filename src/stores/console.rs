//! Console store implementation

use crate::core::{
    EventStream, JogError, Level, LogEvent, Result, Store, StreamOptions, LEVEL_KEY,
    TIMESTAMP_KEY, TYPE_KEY,
};
use chrono::{DateTime, SecondsFormat, Utc};
use colored::{Color, Colorize};
use serde_json::{Map, Value};
use std::io::Write;

/// Prints each event as one line on the terminal.
///
/// Error-level events go to stderr, everything else to stdout. Output is
/// not retained, so `stream` is unsupported and `clear` only flushes.
pub struct ConsoleStore {
    use_colors: bool,
}

impl ConsoleStore {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn color_of(level: Level) -> Color {
        match level {
            Level::Debug => Color::Blue,
            Level::Info => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }

    /// `[timestamp] LEVEL type {remaining attributes}`
    pub fn format_line(&self, event: &LogEvent) -> String {
        let level = event.level().unwrap_or("-");
        let level_str = match (self.use_colors, event.severity()) {
            (true, Some(severity)) => format!("{:5}", level.to_uppercase())
                .color(Self::color_of(severity))
                .to_string(),
            _ => format!("{:5}", level.to_uppercase()),
        };

        let timestamp_str = event
            .timestamp()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_else(|| "-".to_string());

        let rest: Map<String, Value> = event
            .fields()
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), LEVEL_KEY | TYPE_KEY | TIMESTAMP_KEY))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let base = format!(
            "[{}] [{}] {}",
            timestamp_str,
            level_str,
            event.kind().unwrap_or("")
        );

        if rest.is_empty() {
            base
        } else {
            format!("{} {}", base, Value::Object(rest))
        }
    }
}

impl Default for ConsoleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for ConsoleStore {
    fn name(&self) -> &str {
        "console"
    }

    fn add(&self, event: LogEvent) -> Result<()> {
        let line = self.format_line(&event);
        match event.severity() {
            Some(Level::Error) => writeln!(std::io::stderr().lock(), "{}", line)?,
            _ => writeln!(std::io::stdout().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn stream(&self, _options: StreamOptions) -> Result<EventStream> {
        Err(JogError::unsupported(self.name(), "stream"))
    }

    fn clear(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Logger;
    use std::sync::Arc;

    fn event(json: Value) -> LogEvent {
        match json {
            Value::Object(map) => LogEvent::from_map(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_format_line_plain() {
        let store = ConsoleStore::with_colors(false);
        let line = store.format_line(&event(serde_json::json!({
            "uid": "tobi",
            "level": "info",
            "type": "login",
            "timestamp": 0,
        })));

        assert_eq!(line, r#"[1970-01-01T00:00:00.000Z] [INFO ] login {"uid":"tobi"}"#);
    }

    #[test]
    fn test_custom_level_uncolored() {
        let store = ConsoleStore::new();
        let line = store.format_line(&event(serde_json::json!({
            "level": "audit",
            "type": "export",
        })));

        assert!(line.contains("AUDIT"));
        assert!(line.starts_with("[-]"));
    }

    #[test]
    fn test_stream_unsupported() {
        let log = Logger::new(Arc::new(ConsoleStore::with_colors(false)));
        log.info("hello", ()).unwrap();

        let err = log.stream(StreamOptions::new()).unwrap_err();
        assert!(matches!(err, JogError::Unsupported { .. }));
        assert!(log.clear().is_ok());
    }
}
