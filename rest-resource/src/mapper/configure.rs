//! Field mapping from a single source object.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use super::{normalize, MapOptions};
use crate::case::camel_case;
use crate::error::MapError;
use crate::model::{FormattedData, Resource, Value, Values};

/// A mapping session between a resource and one bound source object.
///
/// Explicit mappings ([`map`](Self::map), [`map_formatted`](Self::map_formatted))
/// win over [`map_all`](Self::map_all): bulk mapping only fills keys that are
/// still absent and not excluded. Exclusions last for the session.
pub struct ConfigureMap<'r> {
    resource: &'r mut Resource,
    source_type: &'static str,
    fields: Values,
    excluded: HashSet<String>,
}

impl<'r> ConfigureMap<'r> {
    pub(super) fn bind<T: Serialize + ?Sized>(
        resource: &'r mut Resource,
        source: &T,
        options: &MapOptions,
    ) -> Result<Self, MapError> {
        let source_type = std::any::type_name::<T>();
        let fields = match normalize(source, options)? {
            Value::Map(fields) => fields,
            other => {
                return Err(MapError::NotStructLike {
                    source_type,
                    kind: other.kind(),
                })
            }
        };

        debug!(source_type, fields = fields.len(), "Mapping session started");

        Ok(Self {
            resource,
            source_type,
            fields,
            excluded: HashSet::new(),
        })
    }

    fn field(&self, field: &str) -> Result<(String, Value), MapError> {
        let key = camel_case(field);
        match self.fields.get(&key) {
            Some(value) => Ok((key, value.clone())),
            None => {
                debug!(field, source_type = self.source_type, "Field not found on source");
                Err(MapError::FieldNotFound {
                    field: field.to_string(),
                    source_type: self.source_type,
                })
            }
        }
    }

    /// Copies `field` from the source into the resource.
    ///
    /// ## Errors
    ///
    /// Returns [`MapError::FieldNotFound`] if the source has no such field.
    pub fn map(self, field: &str) -> Result<Self, MapError> {
        let (key, value) = self.field(field)?;
        self.resource.values_mut().insert(key, value);
        Ok(self)
    }

    /// Copies `field` wrapped in [`FormattedData`] rendered by `formatter`.
    ///
    /// ## Errors
    ///
    /// Returns [`MapError::FieldNotFound`] if the source has no such field.
    pub fn map_formatted<F>(self, field: &str, formatter: F) -> Result<Self, MapError>
    where
        F: FnOnce(&Value) -> String,
    {
        let (key, value) = self.field(field)?;
        let formatted = FormattedData::new(value, formatter);
        self.resource.values_mut().insert(key, Value::Formatted(formatted));
        Ok(self)
    }

    /// Copies every source field, in declaration order, whose key is not yet
    /// present in the resource and not excluded.
    pub fn map_all(self) -> Self {
        for (key, value) in &self.fields {
            if self.excluded.contains(key) {
                trace!(key = key.as_str(), "Skipping excluded field");
                continue;
            }
            if self.resource.values().contains_key(key) {
                trace!(key = key.as_str(), "Skipping field already mapped");
                continue;
            }
            self.resource.values_mut().insert(key.clone(), value.clone());
        }
        self
    }

    /// Excludes `field` for the rest of the session and removes it from the
    /// resource if present.
    pub fn exclude(mut self, field: &str) -> Self {
        let key = camel_case(field);
        self.resource.values_mut().shift_remove(&key);
        self.excluded.insert(key);
        self
    }

    /// Ends the session and hands back the resource.
    pub fn end_map(self) -> &'r mut Resource {
        self.resource
    }
}
