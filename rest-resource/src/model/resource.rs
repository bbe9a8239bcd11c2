//! The hypermedia resource.

use indexmap::IndexMap;

use super::{FormattedData, Link, Value, Values};
use crate::case::camel_case;

/// A hypermedia resource: values, named links and embedded child resources.
///
/// Resources start empty and are filled through [`set`](Self::set),
/// [`set_formatted`](Self::set_formatted), the mapping builders
/// ([`map_from`](Self::map_from), [`map_slice_from`](Self::map_slice_from)),
/// [`link`](Self::link) and [`embed`](Self::embed). Encoders only borrow a
/// resource, so once it is handed over it is no longer mutated.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::{Link, Resource};
///
/// let mut resource = Resource::new("Item");
/// resource
///     .set("Name", "widget")
///     .set("count", 3)
///     .link("self", Link::new("/items/1"));
///
/// assert!(resource.contains_key("name"));
/// assert_eq!(resource.links().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    schema: String,
    values: Values,
    links: IndexMap<String, Link>,
    embedded: IndexMap<String, Vec<Resource>>,
}

impl Resource {
    /// Creates an empty resource with a display name.
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            ..Self::default()
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn set_schema(&mut self, schema: impl Into<String>) -> &mut Self {
        self.schema = schema.into();
        self
    }

    /// Stores `value` under the camelCased `name`, replacing any previous entry.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.values.insert(camel_case(name), value.into());
        self
    }

    /// Stores `raw` together with its rendering by `formatter`.
    pub fn set_formatted<T, F>(&mut self, name: &str, raw: T, formatter: F) -> &mut Self
    where
        T: Into<Value>,
        F: FnOnce(&T) -> String,
    {
        self.set(name, FormattedData::new(raw, formatter))
    }

    /// Looks up a value by name; the name is camelCased first.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(&camel_case(name))
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(&camel_case(name))
    }

    /// Removes a value, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(&camel_case(name))
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut Values {
        &mut self.values
    }

    /// Adds or replaces the link called `name`.
    pub fn link(&mut self, name: impl Into<String>, link: Link) -> &mut Self {
        self.links.insert(name.into(), link);
        self
    }

    pub fn links(&self) -> &IndexMap<String, Link> {
        &self.links
    }

    /// Appends `child` to the embedded entry called `name`.
    pub fn embed(&mut self, name: impl Into<String>, child: Resource) -> &mut Self {
        self.embedded.entry(name.into()).or_default().push(child);
        self
    }

    /// Appends every child to the embedded entry called `name`, creating the
    /// entry even when `children` is empty.
    pub fn embed_all(
        &mut self,
        name: impl Into<String>,
        children: impl IntoIterator<Item = Resource>,
    ) -> &mut Self {
        self.embedded.entry(name.into()).or_default().extend(children);
        self
    }

    pub fn embedded(&self) -> &IndexMap<String, Vec<Resource>> {
        &self.embedded
    }
}
