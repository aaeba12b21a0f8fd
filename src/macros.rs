//! Logging macros for ergonomic attribute building.
//!
//! The level macros take a logger, the event type and any number of
//! `key = value` attributes; `attrs!` builds an [`Attributes`](crate::Attributes)
//! from `"key" => value` pairs.
//!
//! # Examples
//!
//! ```
//! use jog::prelude::*;
//! use jog::{attrs, info};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let log = Logger::new(store.clone());
//!
//! // Event type only
//! info!(log, "server started")?;
//!
//! // With attributes
//! let port = 8080;
//! info!(log, "listening", port = port, tls = false)?;
//!
//! // Attributes built separately
//! log.info("user login", attrs! { "uid" => "tobi", "attempt" => 2 })?;
//!
//! assert_eq!(store.len(), 3);
//! # Ok::<(), jog::JogError>(())
//! ```

/// Build [`Attributes`](crate::Attributes) from `key => value` pairs.
///
/// Keys are anything `Into<String>`, values anything `Into<serde_json::Value>`.
///
/// # Examples
///
/// ```
/// use jog::attrs;
///
/// let attrs = attrs! { "vid" => "abc", "views" => 3 };
/// assert_eq!(attrs.len(), 2);
/// assert!(attrs! {}.is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attributes::new();
        $( attrs.insert($key, $value); )+
        attrs
    }};
}

/// Write an event at any level name, including custom ones.
///
/// Evaluates to the logger's `write` result.
///
/// # Examples
///
/// ```
/// # use jog::prelude::*;
/// # use std::sync::Arc;
/// # let log = Logger::new(Arc::new(MemoryStore::new()));
/// use jog::log;
/// log!(log, "audit", "password changed", uid = "tobi")?;
/// log!(log, Level::Warn, "slow query")?;
/// # Ok::<(), jog::JogError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $kind:expr $(,)?) => {
        $logger.write($level, $kind, ())
    };
    ($logger:expr, $level:expr, $kind:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $logger.write($level, $kind, {
            let mut attrs = $crate::Attributes::new();
            $( attrs.insert(stringify!($key), $value); )+
            attrs
        })
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __level_call {
    ($method:ident, $logger:expr, $kind:expr $(,)?) => {
        $logger.$method($kind, ())
    };
    ($method:ident, $logger:expr, $kind:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $logger.$method($kind, {
            let mut attrs = $crate::Attributes::new();
            $( attrs.insert(stringify!($key), $value); )+
            attrs
        })
    };
}

/// Write a debug-level event.
///
/// # Examples
///
/// ```
/// # use jog::prelude::*;
/// # use std::sync::Arc;
/// # let log = Logger::new(Arc::new(MemoryStore::new()));
/// use jog::debug;
/// debug!(log, "cache miss", key = "user:42")?;
/// # Ok::<(), jog::JogError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__level_call!(debug, $logger, $($arg)+)
    };
}

/// Write an info-level event.
///
/// # Examples
///
/// ```
/// # use jog::prelude::*;
/// # use std::sync::Arc;
/// # let log = Logger::new(Arc::new(MemoryStore::new()));
/// use jog::info;
/// info!(log, "application started")?;
/// info!(log, "processing batch", items = 100)?;
/// # Ok::<(), jog::JogError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__level_call!(info, $logger, $($arg)+)
    };
}

/// Write a warn-level event.
///
/// # Examples
///
/// ```
/// # use jog::prelude::*;
/// # use std::sync::Arc;
/// # let log = Logger::new(Arc::new(MemoryStore::new()));
/// use jog::warn;
/// warn!(log, "low disk space", free_mb = 120)?;
/// # Ok::<(), jog::JogError>(())
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__level_call!(warn, $logger, $($arg)+)
    };
}

/// Write an error-level event.
///
/// # Examples
///
/// ```
/// # use jog::prelude::*;
/// # use std::sync::Arc;
/// # let log = Logger::new(Arc::new(MemoryStore::new()));
/// use jog::error;
/// error!(log, "upstream failed", status = 502, retry = true)?;
/// # Ok::<(), jog::JogError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__level_call!(error, $logger, $($arg)+)
    };
}
