//! Hypermedia JSON encoding.
//!
//! The document is assembled as a [`serde_json::Value`] tree and serialized
//! once, so every key and string is escaped by `serde_json`. Key order
//! follows arrival order: values first, then `_links`, then `_embedded`.

use std::io;

use serde_json::{Map, Number, Value as JsonValue};
use tracing::{debug, instrument};

use super::hypermedia::{link_values, EMBEDDED_KEY, LINKS_KEY};
use super::JsonOptions;
use crate::error::EncodeError;
use crate::model::{FormattedData, Resource, Scalar, Value, ValueKind, Values};

/// Encodes a resource as compact hypermedia JSON.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::{encoding::encode_json, Link, Resource};
///
/// let mut resource = Resource::default();
/// resource.link("self", Link::new("/items/1"));
///
/// let json = encode_json(&resource).unwrap();
/// assert_eq!(json, br#"{"_links":{"self":{"href":"/items/1"}}}"#);
/// ```
pub fn encode_json(resource: &Resource) -> Result<Vec<u8>, EncodeError> {
    encode_json_with(resource, &JsonOptions::default())
}

/// Encodes a resource as hypermedia JSON with explicit options.
///
/// ## Errors
///
/// Returns [`EncodeError::UnsupportedValueKind`] for values JSON cannot
/// represent (non-finite floats, formatted numbers that are not number
/// literals) and [`EncodeError::DepthLimitExceeded`] for overly deep trees.
pub fn encode_json_with(resource: &Resource, options: &JsonOptions) -> Result<Vec<u8>, EncodeError> {
    let document = to_json_value(resource, options)?;
    let bytes = if options.pretty {
        serde_json::to_vec_pretty(&document)?
    } else {
        serde_json::to_vec(&document)?
    };
    debug!(bytes = bytes.len(), "Encoded JSON");
    Ok(bytes)
}

/// Encodes a resource into `writer`.
///
/// The whole document is built before the first byte is written, so an
/// encoding error never leaves a partial document in the sink.
pub fn write_json<W: io::Write>(resource: &Resource, writer: W, options: &JsonOptions) -> Result<(), EncodeError> {
    let document = to_json_value(resource, options)?;
    let written = if options.pretty {
        serde_json::to_writer_pretty(writer, &document)
    } else {
        serde_json::to_writer(writer, &document)
    };
    written.map_err(|e| {
        if e.is_io() {
            EncodeError::Io(e.into())
        } else {
            EncodeError::Json(e)
        }
    })
}

/// Builds the JSON document tree for a resource.
#[instrument(
    name = "encode_json",
    level = "debug",
    skip_all,
    fields(
        schema = resource.schema(),
        values = resource.values().len(),
        links = resource.links().len(),
        embedded = resource.embedded().len(),
    )
)]
pub fn to_json_value(resource: &Resource, options: &JsonOptions) -> Result<JsonValue, EncodeError> {
    let encoder = JsonEncoder {
        limit: options.max_depth,
    };
    let document = encoder.resource(resource, 0)?;
    debug!("Built JSON document");
    Ok(JsonValue::Object(document))
}

struct JsonEncoder {
    limit: usize,
}

impl JsonEncoder {
    fn check_depth(&self, depth: usize) -> Result<(), EncodeError> {
        if depth > self.limit {
            return Err(EncodeError::DepthLimitExceeded { limit: self.limit });
        }
        Ok(())
    }

    fn resource(&self, resource: &Resource, depth: usize) -> Result<Map<String, JsonValue>, EncodeError> {
        self.check_depth(depth)?;
        let mut object = self.values(resource.values(), depth)?;

        if !resource.links().is_empty() {
            let mut links = Map::new();
            for (name, link) in resource.links() {
                let link = self.values(&link_values(link), depth + 1)?;
                links.insert(name.clone(), JsonValue::Object(link));
            }
            object.insert(LINKS_KEY.to_string(), JsonValue::Object(links));
        }

        if !resource.embedded().is_empty() {
            let mut embedded = Map::new();
            for (name, children) in resource.embedded() {
                let value = match children.as_slice() {
                    [single] => JsonValue::Object(self.resource(single, depth + 1)?),
                    many => JsonValue::Array(
                        many.iter()
                            .map(|child| self.resource(child, depth + 1).map(JsonValue::Object))
                            .collect::<Result<_, _>>()?,
                    ),
                };
                embedded.insert(name.clone(), value);
            }
            object.insert(EMBEDDED_KEY.to_string(), JsonValue::Object(embedded));
        }

        Ok(object)
    }

    fn values(&self, values: &Values, depth: usize) -> Result<Map<String, JsonValue>, EncodeError> {
        self.check_depth(depth)?;
        let mut object = Map::new();
        for (key, value) in values {
            object.insert(key.clone(), self.value(key, value, depth + 1)?);
        }
        Ok(object)
    }

    fn value(&self, key: &str, value: &Value, depth: usize) -> Result<JsonValue, EncodeError> {
        match value {
            Value::Scalar(scalar) => scalar_json(key, scalar),
            Value::Formatted(fd) => formatted_json(key, fd),
            Value::Map(map) => self.values(map, depth).map(JsonValue::Object),
            Value::Sequence(items) => {
                self.check_depth(depth)?;
                items
                    .iter()
                    .map(|item| self.value(key, item, depth + 1))
                    .collect::<Result<_, _>>()
                    .map(JsonValue::Array)
            }
        }
    }
}

fn scalar_json(key: &str, scalar: &Scalar) -> Result<JsonValue, EncodeError> {
    let value = match scalar {
        Scalar::Null => JsonValue::Null,
        Scalar::Bool(b) => JsonValue::Bool(*b),
        Scalar::Int(i) => JsonValue::from(*i),
        Scalar::UInt(u) => JsonValue::from(*u),
        Scalar::Float(x) => Number::from_f64(*x)
            .map(JsonValue::Number)
            .ok_or_else(|| EncodeError::unsupported(key, ValueKind::Float, format!("{x} is not a finite number")))?,
        Scalar::String(s) => JsonValue::String(s.clone()),
    };
    Ok(value)
}

/// Formatted data keeps the JSON type of its raw value: string raws are
/// quoted, numeric and boolean raws emit the rendered text as a literal.
fn formatted_json(key: &str, fd: &FormattedData) -> Result<JsonValue, EncodeError> {
    let rendered = fd.rendered();
    let kind = fd.raw_kind();
    let literal = rendered.trim();

    match kind {
        ValueKind::String => Ok(JsonValue::String(rendered.to_string())),
        ValueKind::Integer | ValueKind::Float => serde_json::from_str::<Number>(literal)
            .map(JsonValue::Number)
            .map_err(|_| EncodeError::unsupported(key, kind, format!("formatted value '{rendered}' is not a number literal"))),
        ValueKind::Bool => match literal {
            "true" => Ok(JsonValue::Bool(true)),
            "false" => Ok(JsonValue::Bool(false)),
            _ => Err(EncodeError::unsupported(
                key,
                kind,
                format!("formatted value '{rendered}' is not a boolean literal"),
            )),
        },
        _ => serde_json::from_str::<JsonValue>(literal)
            .map_err(|_| EncodeError::unsupported(key, kind, format!("formatted value '{rendered}' is not a JSON literal"))),
    }
}
