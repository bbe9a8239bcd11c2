//! Deterministic XML encoding.
//!
//! The encoder works over a value tree. Keys are sorted bytewise at every
//! level and every sequence item is wrapped in a `<Value>` element, so the
//! same values always produce the same bytes whatever order they were set
//! in. The complete token stream is built before anything is written.
//!
//! ## Examples
//!
//! ```rust
//! use rest_resource::{encoding::encode_xml, Resource};
//!
//! let mut resource = Resource::default();
//! resource.set("zeta", 1).set("alpha", "a");
//!
//! let xml = encode_xml(&resource).unwrap();
//! assert_eq!(xml, b"<resource><alpha>a</alpha><zeta>1</zeta></resource>");
//! ```

use std::borrow::Cow;
use std::io;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::{debug, instrument};

use super::hypermedia::hypermedia_values;
use super::XmlOptions;
use crate::error::EncodeError;
use crate::model::{Resource, Scalar, Value, Values};

/// Wrapper element for every sequence item.
pub const SEQUENCE_ITEM: &str = "Value";

/// Encodes a resource's values as XML under a `<resource>` root.
pub fn encode_xml(resource: &Resource) -> Result<Vec<u8>, EncodeError> {
    encode_xml_with(resource, &XmlOptions::default())
}

/// Encodes a resource as XML with explicit options.
///
/// ## Errors
///
/// Returns [`EncodeError::InvalidElementName`] if the root or any key is not
/// a legal element name, [`EncodeError::UnsupportedValueKind`] for text
/// holding characters XML 1.0 forbids and [`EncodeError::DepthLimitExceeded`]
/// for overly deep trees.
pub fn encode_xml_with(resource: &Resource, options: &XmlOptions) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Vec::new();
    write_xml(resource, &mut buffer, options)?;
    Ok(buffer)
}

/// Encodes a resource into `writer`.
///
/// Nothing reaches the sink unless the whole token stream was built.
#[instrument(
    name = "encode_xml",
    level = "debug",
    skip_all,
    fields(
        schema = resource.schema(),
        values = resource.values().len(),
        root = options.root.as_str(),
        hypermedia = options.include_hypermedia,
    )
)]
pub fn write_xml<W: io::Write>(resource: &Resource, writer: W, options: &XmlOptions) -> Result<(), EncodeError> {
    let composed;
    let values = if options.include_hypermedia {
        composed = hypermedia_values(resource, options.max_depth)?;
        &composed
    } else {
        resource.values()
    };

    let mut tokens = TokenStream::new(options.max_depth);
    if options.declaration {
        tokens.push(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)));
    }
    tokens.element(&options.root, |tokens| tokens.map(values, 1))?;
    debug!(tokens = tokens.events.len(), "Built XML token stream");

    let mut writer = match options.indent {
        Some(spaces) => Writer::new_with_indent(writer, b' ', spaces),
        None => Writer::new(writer),
    };
    for event in tokens.events {
        writer.write_event(event)?;
    }
    Ok(())
}

/// Returns `true` if `name` can be used as an element name.
///
/// Names start with a letter or underscore and continue with letters,
/// digits, `-`, `_` or `.`. Colons are rejected since no namespaces are
/// declared.
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

struct TokenStream {
    events: Vec<Event<'static>>,
    limit: usize,
}

impl TokenStream {
    fn new(limit: usize) -> Self {
        Self {
            events: Vec::new(),
            limit,
        }
    }

    fn push(&mut self, event: Event<'static>) {
        self.events.push(event);
    }

    fn check_depth(&self, depth: usize) -> Result<(), EncodeError> {
        if depth > self.limit {
            return Err(EncodeError::DepthLimitExceeded { limit: self.limit });
        }
        Ok(())
    }

    fn element<F>(&mut self, name: &str, body: F) -> Result<(), EncodeError>
    where
        F: FnOnce(&mut Self) -> Result<(), EncodeError>,
    {
        if !is_valid_element_name(name) {
            return Err(EncodeError::InvalidElementName {
                name: name.to_string(),
            });
        }
        self.push(Event::Start(BytesStart::new(name.to_string())));
        body(self)?;
        self.push(Event::End(BytesEnd::new(name.to_string())));
        Ok(())
    }

    fn map(&mut self, values: &Values, depth: usize) -> Result<(), EncodeError> {
        self.check_depth(depth)?;
        let mut keys: Vec<&String> = values.keys().collect();
        keys.sort_unstable();
        for key in keys {
            self.entry(key, &values[key.as_str()], depth)?;
        }
        Ok(())
    }

    fn entry(&mut self, name: &str, value: &Value, depth: usize) -> Result<(), EncodeError> {
        if let Value::Scalar(Scalar::Null) = value {
            if !is_valid_element_name(name) {
                return Err(EncodeError::InvalidElementName {
                    name: name.to_string(),
                });
            }
            self.push(Event::Empty(BytesStart::new(name.to_string())));
            return Ok(());
        }
        self.element(name, |tokens| tokens.content(name, value, depth + 1))
    }

    fn content(&mut self, name: &str, value: &Value, depth: usize) -> Result<(), EncodeError> {
        match value {
            Value::Scalar(scalar) => self.text(name, value, Cow::Owned(scalar.to_string())),
            Value::Formatted(fd) => self.text(name, value, Cow::Borrowed(fd.rendered())),
            Value::Map(map) => self.map(map, depth),
            Value::Sequence(items) => {
                self.check_depth(depth)?;
                for item in items {
                    self.entry(SEQUENCE_ITEM, item, depth)?;
                }
                Ok(())
            }
        }
    }

    fn text(&mut self, name: &str, value: &Value, text: Cow<'_, str>) -> Result<(), EncodeError> {
        if let Some(c) = text.chars().find(|c| !is_xml_char(*c)) {
            return Err(EncodeError::unsupported(
                name,
                value.kind(),
                format!("contains U+{:04X}, which XML 1.0 cannot represent", u32::from(c)),
            ));
        }
        if !text.is_empty() {
            self.push(Event::Text(BytesText::new(&text).into_owned()));
        }
        Ok(())
    }
}

/// Returns `true` if `c` may appear in XML 1.0 character data.
///
/// Control characters other than tab, newline and carriage return are
/// excluded, as are the noncharacters U+FFFE and U+FFFF. Character
/// references to them are not well-formed either, so they are rejected.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
