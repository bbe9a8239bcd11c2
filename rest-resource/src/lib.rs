//! Hypermedia resource representations.
//!
//! The `rest_resource` crate builds HAL-style resources (data values, typed
//! links and embedded sub-resources) from arbitrary domain objects and
//! encodes them as JSON or XML.
//!
//! ## Features
//!
//! - **Normalized value model**: every stored value is one of a closed set
//!   of variants with camelCase keys
//! - **Serde-driven mapping**: copy fields from any `Serialize` type by name,
//!   with per-field formatting and exclusions
//! - **Hypermedia JSON**: `_links` and `_embedded` with single/plural
//!   collapsing
//! - **Deterministic XML**: sorted keys, built as a token stream
//! - **Layered error handling**: separate errors for mapping and encoding
//!
//! ## Example
//!
//! ```rust
//! use rest_resource::{encode_json, Link, Resource};
//!
//! #[derive(serde::Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Item { id: u32, name: String, price: f64 }
//!
//! let item = Item { id: 1, name: "Widget".into(), price: 4234.3982 };
//!
//! let mut resource = Resource::new("Item");
//! resource
//!     .map_from(&item)?
//!     .map_formatted("Price", |v| format!("{:.2}", v.as_f64().unwrap_or_default()))?
//!     .map_all()
//!     .end_map()
//!     .link("self", Link::new("/items/1"));
//!
//! let json = encode_json(&resource)?;
//! assert_eq!(
//!     String::from_utf8_lossy(&json),
//!     r#"{"price":4234.40,"id":1,"name":"Widget","_links":{"self":{"href":"/items/1"}}}"#
//! );
//! # Ok::<(), rest_resource::ResourceError>(())
//! ```

pub mod case;
pub mod encoding;
pub mod error;
pub mod mapper;
pub mod model;
pub mod present;

// Re-exports for convenience
pub use case::camel_case;
pub use encoding::{encode_json, encode_xml, Format, JsonOptions, XmlOptions};
pub use error::{EncodeError, MapError, ResourceError};
pub use mapper::{ConfigureMap, ConfigureSliceMap, MapOptions};
pub use model::{
    FormattedData, Link, Parameter, Resource, RestMethod, Scalar, Value, ValueKind, Values,
};
