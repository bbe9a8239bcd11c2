//! Merging links and embedded resources into a plain value tree.
//!
//! JSON renders `_links` and `_embedded` itself. Formats that only know
//! about value trees (XML) get them through [`hypermedia_values`].

use crate::error::EncodeError;
use crate::model::{Link, Resource, Value, Values};

pub(crate) const LINKS_KEY: &str = "_links";
pub(crate) const EMBEDDED_KEY: &str = "_embedded";

/// The value-tree form of a link.
///
/// Always carries `href`; `verb` only when it is not GET, `templated` only
/// when set, and `parameters` only when there are any, keyed by parameter
/// name with just the non-empty `default`, `listOfValues` and `dataType`.
pub(crate) fn link_values(link: &Link) -> Values {
    let mut values = Values::new();
    values.insert("href".to_string(), Value::from(link.href.as_str()));

    if !link.is_get() {
        values.insert("verb".to_string(), Value::from(link.verb.as_str()));
    }

    if link.templated {
        values.insert("templated".to_string(), Value::from(true));
    }

    if !link.parameters.is_empty() {
        let mut parameters = Values::new();
        for parameter in &link.parameters {
            let mut fields = Values::new();
            let optional = [
                ("default", &parameter.default_value),
                ("listOfValues", &parameter.list_of_values),
                ("dataType", &parameter.data_type),
            ];
            for (key, value) in optional {
                if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                    fields.insert(key.to_string(), Value::from(value));
                }
            }
            parameters.insert(parameter.name.clone(), Value::Map(fields));
        }
        values.insert("parameters".to_string(), Value::Map(parameters));
    }

    values
}

/// Returns the resource's values followed by `_links` and `_embedded`
/// entries, recursively for embedded resources.
///
/// An embedded entry with exactly one resource becomes a nested map, any
/// other count becomes a sequence of maps.
///
/// ## Errors
///
/// Returns [`EncodeError::DepthLimitExceeded`] if embedded resources nest
/// deeper than `max_depth`.
pub fn hypermedia_values(resource: &Resource, max_depth: usize) -> Result<Values, EncodeError> {
    compose(resource, 0, max_depth)
}

fn compose(resource: &Resource, depth: usize, limit: usize) -> Result<Values, EncodeError> {
    if depth > limit {
        return Err(EncodeError::DepthLimitExceeded { limit });
    }

    let mut values = resource.values().clone();

    if !resource.links().is_empty() {
        let links = resource
            .links()
            .iter()
            .map(|(name, link)| (name.clone(), Value::Map(link_values(link))))
            .collect();
        values.insert(LINKS_KEY.to_string(), Value::Map(links));
    }

    if !resource.embedded().is_empty() {
        let mut embedded = Values::new();
        for (name, children) in resource.embedded() {
            let value = match children.as_slice() {
                [single] => Value::Map(compose(single, depth + 1, limit)?),
                many => Value::Sequence(
                    many.iter()
                        .map(|child| compose(child, depth + 1, limit).map(Value::Map))
                        .collect::<Result<_, _>>()?,
                ),
            };
            embedded.insert(name.clone(), value);
        }
        values.insert(EMBEDDED_KEY.to_string(), Value::Map(embedded));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parameter;

    #[test]
    fn test_plain_link() {
        let values = link_values(&Link::new("/items/1"));
        assert_eq!(values.len(), 1);
        assert_eq!(values["href"].as_str(), Some("/items/1"));
    }

    #[test]
    fn test_full_link() {
        let link = Link::new("/items{?q}")
            .with_verb("POST")
            .templated()
            .with_parameter(
                Parameter::new("q")
                    .with_default_value("all")
                    .with_data_type(""),
            );
        let values = link_values(&link);

        assert_eq!(values["verb"].as_str(), Some("POST"));
        assert_eq!(values["templated"].as_bool(), Some(true));
        let q = values["parameters"].as_map().unwrap()["q"].as_map().unwrap();
        assert_eq!(q.len(), 1);
        assert_eq!(q["default"].as_str(), Some("all"));
    }

    #[test]
    fn test_without_hypermedia_is_plain_copy() {
        let mut resource = Resource::default();
        resource.set("a", 1);
        let values = hypermedia_values(&resource, 8).unwrap();
        assert_eq!(&values, resource.values());
    }

    #[test]
    fn test_embedded_collapsing() {
        let mut child = Resource::default();
        child.set("id", 1);

        let mut resource = Resource::default();
        resource
            .link("self", Link::new("/orders/1"))
            .embed("customer", child.clone())
            .embed_all("items", vec![child.clone(), child]);

        let values = hypermedia_values(&resource, 8).unwrap();
        let embedded = values[EMBEDDED_KEY].as_map().unwrap();
        assert!(embedded["customer"].as_map().is_some());
        assert_eq!(embedded["items"].as_sequence().map(|s| s.len()), Some(2));
        assert!(values[LINKS_KEY].as_map().unwrap().contains_key("self"));
    }

    #[test]
    fn test_depth_limit() {
        let mut inner = Resource::default();
        inner.embed("next", Resource::default());
        let mut outer = Resource::default();
        outer.embed("next", inner);

        assert!(hypermedia_values(&outer, 2).is_ok());
        assert!(matches!(
            hypermedia_values(&outer, 1),
            Err(EncodeError::DepthLimitExceeded { limit: 1 })
        ));
    }
}
