//! Top-level resource error type.

use super::{EncodeError, MapError};
use thiserror::Error;

/// Top-level error type for all resource operations.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::error::ResourceError;
///
/// fn describe(err: &ResourceError) -> &'static str {
///     match err {
///         ResourceError::Map(_) => "mapping failed",
///         ResourceError::Encode(_) => "encoding failed",
///     }
/// }
/// # let _ = describe;
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Populating the resource failed.
    #[error(transparent)]
    Map(#[from] MapError),

    /// Rendering the resource failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_map_error() {
        let err: ResourceError = MapError::DepthLimitExceeded { limit: 4 }.into();
        assert!(matches!(err, ResourceError::Map(_)));
    }

    #[test]
    fn test_from_encode_error() {
        let err: ResourceError = EncodeError::InvalidElementName {
            name: "a b".to_string(),
        }
        .into();
        assert!(matches!(err, ResourceError::Encode(_)));
        assert_eq!(err.to_string(), "Invalid XML element name: 'a b'");
    }
}
