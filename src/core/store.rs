//! Store trait for event persistence and transport

use super::{
    error::Result,
    event::LogEvent,
    stream::{EventStream, StreamOptions},
};

/// Backend a [`Logger`](super::Logger) hands its events to.
///
/// A logger and all of its namespaces share one store, so implementations
/// take `&self` and synchronize internally. Errors are returned as-is to
/// whoever called the logger.
///
/// # Example
///
/// ```
/// use jog::core::{EventStream, LogEvent, Result, Store, StreamOptions};
/// use parking_lot::Mutex;
///
/// #[derive(Default)]
/// struct VecStore(Mutex<Vec<LogEvent>>);
///
/// impl Store for VecStore {
///     fn name(&self) -> &str {
///         "vec"
///     }
///
///     fn add(&self, event: LogEvent) -> Result<()> {
///         self.0.lock().push(event);
///         Ok(())
///     }
///
///     fn stream(&self, _options: StreamOptions) -> Result<EventStream> {
///         let (sender, stream) = EventStream::channel();
///         for event in self.0.lock().iter() {
///             sender.send(event.clone());
///         }
///         Ok(stream)
///     }
///
///     fn clear(&self) -> Result<()> {
///         self.0.lock().clear();
///         Ok(())
///     }
/// }
/// ```
pub trait Store: Send + Sync {
    fn name(&self) -> &str;

    /// Persist or transmit one event
    fn add(&self, event: LogEvent) -> Result<()>;

    /// Live sequence of stored events.
    ///
    /// With `options.end == Some(true)` the stream completes once history is
    /// exhausted; otherwise it runs until cancelled.
    fn stream(&self, options: StreamOptions) -> Result<EventStream>;

    /// Erase all stored events
    fn clear(&self) -> Result<()>;
}
