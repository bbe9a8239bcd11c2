//! Errors raised while mapping source objects into a resource.

use std::fmt;

use thiserror::Error;

use crate::model::ValueKind;

/// Errors in populating a resource from a source object.
///
/// These errors are recoverable: the resource keeps whatever was mapped
/// before the failing call, and nothing is encoded implicitly.
#[derive(Debug, Error)]
pub enum MapError {
    /// The bound source object has no field with the requested name.
    #[error("Field not found: {field} on {source_type}")]
    FieldNotFound {
        /// The field name as requested by the caller.
        field: String,
        /// Type name of the bound source object.
        source_type: &'static str,
    },

    /// An element of a mapped collection has no field with the requested name.
    #[error("Field not found: {field} on element {index}")]
    ElementFieldNotFound {
        /// The field name as requested by the caller.
        field: String,
        /// Position of the element in the source collection.
        index: usize,
    },

    /// The source object does not normalize into a field map.
    #[error("Source {source_type} is not struct-like (normalized to {kind})")]
    NotStructLike {
        /// Type name of the bound source object.
        source_type: &'static str,
        /// The kind the source normalized into.
        kind: ValueKind,
    },

    /// An element of a mapped collection does not normalize into a field map.
    #[error("Element {index} is not struct-like (normalized to {kind})")]
    ElementNotStructLike {
        /// Position of the element in the source collection.
        index: usize,
        /// The kind the element normalized into.
        kind: ValueKind,
    },

    /// The source object failed to serialize.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A number that fits none of the scalar representations.
    #[error("Unrepresentable number: {literal}")]
    UnrepresentableNumber {
        /// The number as serialized.
        literal: String,
    },

    /// The source object nests deeper than the configured limit.
    #[error("Nesting depth limit of {limit} exceeded")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl MapError {
    /// Creates a field-not-found error for a source of type `T`.
    pub fn field_not_found<T: ?Sized>(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
            source_type: std::any::type_name::<T>(),
        }
    }

    /// Returns `true` if a requested field was missing on the source.
    pub fn is_field_not_found(&self) -> bool {
        matches!(
            self,
            Self::FieldNotFound { .. } | Self::ElementFieldNotFound { .. }
        )
    }
}

impl serde::ser::Error for MapError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Serialize(<serde_json::Error as serde::ser::Error>::custom(msg))
    }
}
