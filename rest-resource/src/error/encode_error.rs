//! Errors raised while encoding a resource.

use thiserror::Error;

use crate::model::ValueKind;

/// Errors during JSON or XML encoding.
///
/// Any of these aborts the whole encode call; no partial document is
/// returned.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A value the target format cannot represent.
    #[error("Unsupported {kind} value for '{key}': {reason}")]
    UnsupportedValueKind {
        /// Key of the offending value.
        key: String,
        /// Runtime kind of the offending value.
        kind: ValueKind,
        /// Why the format rejected it.
        reason: String,
    },

    /// A key that is not a legal XML element name.
    #[error("Invalid XML element name: '{name}'")]
    InvalidElementName {
        /// The rejected name.
        name: String,
    },

    /// Embedded resources or nested values exceed the configured depth.
    #[error("Nesting depth limit of {limit} exceeded")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// Writing to the output sink failed. XML writer failures land here too.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EncodeError {
    /// Creates an unsupported-value error.
    pub fn unsupported(key: impl Into<String>, kind: ValueKind, reason: impl Into<String>) -> Self {
        Self::UnsupportedValueKind {
            key: key.into(),
            kind,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the resource content, rather than the sink, caused
    /// the failure.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedValueKind { .. }
                | Self::InvalidElementName { .. }
                | Self::DepthLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = EncodeError::unsupported("price", ValueKind::Float, "not a finite number");
        assert_eq!(
            err.to_string(),
            "Unsupported float value for 'price': not a finite number"
        );
        assert!(err.is_content_error());
    }

    #[test]
    fn test_invalid_element_name() {
        let err = EncodeError::InvalidElementName {
            name: "1st".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid XML element name: '1st'");
    }

    #[test]
    fn test_io_is_not_content_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: EncodeError = io.into();
        assert!(matches!(err, EncodeError::Io(_)));
        assert!(!err.is_content_error());
    }
}
