//! Live event streams produced by stores
//!
//! A store answers `stream` with an [`EventStream`], the consuming half of a
//! channel. The store keeps the matching [`StreamSender`] and pushes events
//! until it runs out of history (finite streams) or until the consumer
//! cancels (indefinite streams).

use super::error::{JogError, Result};
use super::event::LogEvent;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Polling interval used when `stream` is called without one (milliseconds)
pub const DEFAULT_STREAM_INTERVAL_MS: u64 = 2000;

/// Options passed through to a store's `stream`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamOptions {
    /// Polling interval in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,

    /// `Some(true)` ends the stream once history is exhausted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<bool>,

    /// Store-specific options
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StreamOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn interval(mut self, millis: u64) -> Self {
        self.interval = Some(millis);
        self
    }

    #[must_use]
    pub fn end(mut self, end: bool) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn with_option<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Fill in the default interval when none (or zero) was given
    #[must_use]
    pub fn with_default_interval(mut self) -> Self {
        if matches!(self.interval, None | Some(0)) {
            self.interval = Some(DEFAULT_STREAM_INTERVAL_MS);
        }
        self
    }

    pub fn interval_duration(&self) -> Duration {
        match self.interval {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => Duration::from_millis(DEFAULT_STREAM_INTERVAL_MS),
        }
    }

    /// Whether the stream keeps running after history is exhausted
    pub fn is_indefinite(&self) -> bool {
        !self.end.unwrap_or(false)
    }
}

/// Cancels a stream from anywhere, e.g. while another thread iterates it
#[derive(Debug, Clone, Default)]
pub struct StreamHandle {
    cancelled: Arc<AtomicBool>,
}

impl StreamHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Producer half, owned by the store
#[derive(Debug, Clone)]
pub struct StreamSender {
    sender: Sender<LogEvent>,
    handle: StreamHandle,
}

impl StreamSender {
    /// Push one event; `false` once the consumer is gone or cancelled
    pub fn send(&self, event: LogEvent) -> bool {
        if self.handle.is_cancelled() {
            return false;
        }
        self.sender.send(event).is_ok()
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }
}

/// Consumer half returned by `Logger::stream`.
///
/// Iterating blocks until the next event; the iterator ends when the store
/// finishes a finite stream or after cancellation. Dropping the stream
/// cancels it.
#[derive(Debug)]
pub struct EventStream {
    receiver: Receiver<LogEvent>,
    handle: StreamHandle,
}

impl EventStream {
    pub fn channel() -> (StreamSender, EventStream) {
        let (sender, receiver) = unbounded();
        let handle = StreamHandle::default();
        (
            StreamSender {
                sender,
                handle: handle.clone(),
            },
            EventStream { receiver, handle },
        )
    }

    /// Block for the next event
    pub fn recv(&self) -> Result<LogEvent> {
        if self.is_cancelled() {
            return Err(JogError::StreamClosed);
        }
        self.receiver.recv().map_err(|_| JogError::StreamClosed)
    }

    /// Wait up to `timeout`; `Ok(None)` when nothing arrived in time
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<LogEvent>> {
        if self.is_cancelled() {
            return Err(JogError::StreamClosed);
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(JogError::StreamClosed),
        }
    }

    pub fn try_recv(&self) -> Result<Option<LogEvent>> {
        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(JogError::StreamClosed),
        }
    }

    pub fn cancel(&self) {
        self.handle.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }

    pub fn handle(&self) -> StreamHandle {
        self.handle.clone()
    }
}

impl Iterator for EventStream {
    type Item = LogEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv().ok()
    }
}

impl Drop for EventStream {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_injected() {
        let options = StreamOptions::new().with_default_interval();
        assert_eq!(options.interval, Some(DEFAULT_STREAM_INTERVAL_MS));

        let options = StreamOptions::new().interval(0).with_default_interval();
        assert_eq!(options.interval, Some(DEFAULT_STREAM_INTERVAL_MS));

        let options = StreamOptions::new().interval(50).with_default_interval();
        assert_eq!(options.interval, Some(50));
    }

    #[test]
    fn test_end_defaults_to_indefinite() {
        assert!(StreamOptions::new().is_indefinite());
        assert!(StreamOptions::new().end(false).is_indefinite());
        assert!(!StreamOptions::new().end(true).is_indefinite());
    }

    #[test]
    fn test_options_keep_extra_fields() {
        let options: StreamOptions =
            serde_json::from_str(r#"{"interval": 10, "end": true, "since": 5}"#).unwrap();
        assert_eq!(options.interval, Some(10));
        assert_eq!(options.end, Some(true));
        assert_eq!(options.extra["since"], 5);
    }

    #[test]
    fn test_stream_ends_when_sender_dropped() {
        let (sender, stream) = EventStream::channel();
        assert!(sender.send(LogEvent::default()));
        assert!(sender.send(LogEvent::default()));
        drop(sender);

        assert_eq!(stream.count(), 2);
    }

    #[test]
    fn test_cancel_stops_sender() {
        let (sender, stream) = EventStream::channel();
        stream.cancel();

        assert!(sender.is_cancelled());
        assert!(!sender.send(LogEvent::default()));
        assert!(matches!(stream.recv(), Err(JogError::StreamClosed)));
    }

    #[test]
    fn test_drop_cancels() {
        let (sender, stream) = EventStream::channel();
        drop(stream);
        assert!(sender.is_cancelled());
    }

    #[test]
    fn test_recv_timeout_returns_none_when_idle() {
        let (_sender, stream) = EventStream::channel();
        let got = stream.recv_timeout(Duration::from_millis(5)).unwrap();
        assert!(got.is_none());
    }
}
