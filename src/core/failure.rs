//! Error capability for attribute values
//!
//! A value that carries a message and a stack can be attached to an event.
//! When an event is written, such a value is reduced to `{stack, message}`
//! and nothing else from the original error survives.

use serde::{Deserialize, Serialize};
use std::error::Error;

/// Anything that exposes a message and a stack trace
pub trait Failure {
    fn message(&self) -> String;
    fn stack(&self) -> String;
}

/// Every std error is a failure: the stack is its source chain.
impl<E> Failure for E
where
    E: Error + ?Sized,
{
    fn message(&self) -> String {
        self.to_string()
    }

    fn stack(&self) -> String {
        let mut stack = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        stack
    }
}

/// Normalized error stored under an event's `error` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedError {
    pub stack: String,
    pub message: String,
}

impl CapturedError {
    pub fn new(stack: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stack: stack.into(),
            message: message.into(),
        }
    }

    /// Snapshot the stack and message of any failure
    pub fn capture<F: Failure + ?Sized>(failure: &F) -> Self {
        Self {
            stack: failure.stack(),
            message: failure.message(),
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "stack": self.stack,
            "message": self.message,
        })
    }
}

impl Failure for CapturedError {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn stack(&self) -> String {
        self.stack.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "upload failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_std_error_message() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "BOOM");
        assert_eq!(Failure::message(&err), "BOOM");
        assert_eq!(Failure::stack(&err), "BOOM");
    }

    #[test]
    fn test_stack_walks_source_chain() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::NotFound, "missing bucket"));
        let captured = CapturedError::capture(&err);

        assert_eq!(captured.message, "upload failed");
        assert_eq!(captured.stack, "upload failed\n    caused by: missing bucket");
    }

    /// Not a std error, only the capability
    struct Panic {
        reason: &'static str,
        frames: Vec<&'static str>,
    }

    impl Failure for Panic {
        fn message(&self) -> String {
            self.reason.to_string()
        }

        fn stack(&self) -> String {
            self.frames.join("\n")
        }
    }

    #[test]
    fn test_custom_failure_written_as_stack_and_message() {
        use crate::core::{Attributes, Logger};
        use crate::stores::MemoryStore;
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let log = Logger::new(store.clone());
        let panic = Panic {
            reason: "worker died",
            frames: vec!["at worker.rs:10", "at main.rs:3"],
        };

        log.error("crash", Attributes::new().with_field("job", 7).with_error(&panic))
            .unwrap();

        let events = store.events();
        let error = events[0].get("error").unwrap().as_object().unwrap();
        assert_eq!(error.len(), 2);
        assert_eq!(error["message"], "worker died");
        assert_eq!(error["stack"], "at worker.rs:10\nat main.rs:3");
        assert_eq!(events[0].get("job"), Some(&serde_json::json!(7)));
    }

    #[test]
    fn test_json_has_only_stack_and_message() {
        let captured = CapturedError::new("at main.rs:1", "BOOM");
        let value = captured.to_json_value();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["stack"], "at main.rs:1");
        assert_eq!(object["message"], "BOOM");
    }
}
