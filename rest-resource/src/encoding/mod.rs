//! Output formats for resources.
//!
//! [`encode_json`] renders the full hypermedia document (`_links` and
//! `_embedded` included). [`encode_xml`] renders the value tree with sorted
//! keys; links and embedded resources join it only through
//! [`XmlOptions::include_hypermedia`].
//!
//! [`Format`] picks an encoder at runtime, e.g. from a query parameter.

mod hypermedia;
mod json;
mod options;
mod xml;

use strum::{Display, EnumIter, EnumString};

pub use hypermedia::hypermedia_values;
pub use json::{encode_json, encode_json_with, to_json_value, write_json};
pub use options::{JsonOptions, XmlOptions, DEFAULT_MAX_DEPTH, DEFAULT_XML_ROOT};
pub use xml::{encode_xml, encode_xml_with, is_valid_element_name, write_xml, SEQUENCE_ITEM};

use crate::error::EncodeError;
use crate::model::Resource;

/// The output formats a resource can be encoded to.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::{Format, Resource};
///
/// let format: Format = "xml".parse().unwrap();
/// assert_eq!(format.content_type(), "application/xml");
///
/// let bytes = format.encode(&Resource::default()).unwrap();
/// assert_eq!(bytes, b"<resource></resource>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// The media type of documents in this format.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/hal+json",
            Self::Xml => "application/xml",
        }
    }

    /// Encodes `resource` with the default options of this format.
    pub fn encode(self, resource: &Resource) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::Json => encode_json(resource),
            Self::Xml => encode_xml(resource),
        }
    }
}

impl Resource {
    /// Shorthand for [`encode_json`].
    pub fn to_json(&self) -> Result<Vec<u8>, EncodeError> {
        encode_json(self)
    }

    /// Shorthand for [`encode_xml`].
    pub fn to_xml(&self) -> Result<Vec<u8>, EncodeError> {
        encode_xml(self)
    }
}
