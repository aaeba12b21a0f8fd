//! # jog
//!
//! Structured logging facade: leveled events with arbitrary JSON attributes,
//! enriched with inherited defaults and timestamps, handed to a pluggable
//! store.
//!
//! ## Features
//!
//! - **Namespaces**: child loggers inherit default attributes
//! - **Level filtering**: per-logger minimum level, custom levels pass through
//! - **Error normalization**: errors become `{stack, message}` objects
//! - **Pluggable stores**: anything implementing [`Store`]

pub mod core;
pub mod macros;
pub(crate) mod observability;
pub mod stores;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::stores::ConsoleStore;
    pub use crate::stores::MemoryStore;
    pub use crate::attrs;
    pub use crate::core::{
        Attributes, CapturedError, EventStream, Failure, JogError, Level, LogEvent, Logger,
        LoggerBuilder, LoggerOptions, Result, Store, StreamOptions, LEVELS,
    };
}

#[cfg(feature = "console")]
pub use crate::stores::ConsoleStore;
pub use crate::stores::MemoryStore;
pub use crate::core::{
    Attributes, CapturedError, EventStream, Failure, JogError, Level, LogEvent, Logger,
    LoggerBuilder, LoggerOptions, Result, Store, StreamHandle, StreamOptions, StreamSender,
    DEFAULT_STREAM_INTERVAL_MS, LEVELS,
};
