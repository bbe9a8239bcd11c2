//! Layered error types for the resource crate.
//!
//! The error hierarchy follows the two phases a resource goes through:
//! - [`ResourceError`] - Top-level error type for all operations
//! - [`MapError`] - Populating a resource from source objects
//! - [`EncodeError`] - Rendering a resource to an output format

mod encode_error;
mod map_error;
mod resource_error;

pub use encode_error::EncodeError;
pub use map_error::MapError;
pub use resource_error::ResourceError;
