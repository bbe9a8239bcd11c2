//! Resource data model.
//!
//! - [`Resource`] - values, links and embedded resources
//! - [`Value`] - the closed, normalized value tree
//! - [`FormattedData`] - a raw value with its display rendering
//! - [`Link`] / [`Parameter`] - hypermedia links and their inputs

mod formatted;
mod link;
mod method;
mod resource;
mod value;

pub use formatted::FormattedData;
pub use link::{Link, Parameter, DEFAULT_VERB};
pub use method::RestMethod;
pub use resource::Resource;
pub use value::{Scalar, Value, ValueKind, Values};
