//! Error types for jog

pub type Result<T> = std::result::Result<T, JogError>;

#[derive(Debug, thiserror::Error)]
pub enum JogError {
    /// Level name outside debug/info/warn/error
    #[error("invalid logging level '{level}'")]
    InvalidLevel { level: String },

    /// Failure reported by a store, kept intact as the source
    #[error("store '{store}' failed: {source}")]
    Store {
        store: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Store does not provide the requested capability
    #[error("store '{store}' does not support {operation}")]
    Unsupported { store: String, operation: String },

    /// Stream producer went away
    #[error("event stream closed")]
    StreamClosed,

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl JogError {
    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>) -> Self {
        JogError::InvalidLevel {
            level: level.into(),
        }
    }

    /// Wrap a store's own error without altering it
    pub fn store<E>(store: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        JogError::Store {
            store: store.into(),
            source: source.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(store: impl Into<String>, operation: impl Into<String>) -> Self {
        JogError::Unsupported {
            store: store.into(),
            operation: operation.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JogError::Other(msg.into())
    }

    /// Borrow the store's original error, if this is a store failure
    pub fn store_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            JogError::Store { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = JogError::invalid_level("verbose");
        assert!(matches!(err, JogError::InvalidLevel { .. }));

        let err = JogError::unsupported("console", "stream");
        assert!(matches!(err, JogError::Unsupported { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = JogError::invalid_level("verbose");
        assert_eq!(err.to_string(), "invalid logging level 'verbose'");

        let err = JogError::unsupported("console", "stream");
        assert_eq!(err.to_string(), "store 'console' does not support stream");
    }

    #[test]
    fn test_store_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = JogError::store("file", io_err);

        assert!(err.to_string().contains("access denied"));
        let source = err.store_source().expect("store error has a source");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("source is the original io::Error");
        assert_eq!(io.kind(), std::io::ErrorKind::PermissionDenied);
    }
}
