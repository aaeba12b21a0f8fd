//! Internal diagnostics.
//!
//! jog reports its own behavior through `tracing` under the target "jog".
//! The library never installs a subscriber; applications decide whether these
//! events go anywhere.

/// Target for all of jog's own diagnostics.
pub(crate) const JOG_TARGET: &str = "jog";

macro_rules! log_trace {
    ($($field:tt)*) => {
        ::tracing::trace!(target: $crate::observability::JOG_TARGET, $($field)*)
    };
}

macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::JOG_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_trace;
