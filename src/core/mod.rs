//! Core logger types and traits

pub mod attributes;
pub mod error;
pub mod event;
pub mod failure;
pub mod level;
pub mod logger;
pub mod store;
pub mod stream;

pub use attributes::{Attributes, ERROR_KEY};
pub use error::{JogError, Result};
pub use event::{LogEvent, LEVEL_KEY, TIMESTAMP_KEY, TYPE_KEY};
pub use failure::{CapturedError, Failure};
pub use level::{Level, LEVELS};
pub use logger::{Logger, LoggerBuilder, LoggerOptions};
pub use store::Store;
pub use stream::{
    EventStream, StreamHandle, StreamOptions, StreamSender, DEFAULT_STREAM_INTERVAL_MS,
};
