//! Column-wise projection of source collections.

use serde::Serialize;
use tracing::debug;

use super::{normalize, MapOptions};
use crate::case::camel_case;
use crate::error::MapError;
use crate::model::{Resource, Value, Values};

/// Builder that copies selected fields of every element of a collection into
/// a parallel sequence of nested maps stored on the resource.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::Resource;
///
/// #[derive(serde::Serialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct Line { sku: &'static str, qty: u32, cost: f64 }
///
/// let lines = vec![
///     Line { sku: "A-1", qty: 2, cost: 1.0 },
///     Line { sku: "B-7", qty: 1, cost: 9.5 },
/// ];
///
/// let mut resource = Resource::new("Order");
/// resource.map_slice_from("Lines", &lines)?.map("Sku")?.map("Qty")?;
///
/// let rows = resource.get("lines").unwrap().as_sequence().unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].as_map().unwrap()["sku"].as_str(), Some("B-7"));
/// assert!(!rows[1].as_map().unwrap().contains_key("cost"));
/// # Ok::<(), rest_resource::error::MapError>(())
/// ```
pub struct ConfigureSliceMap<'r> {
    resource: &'r mut Resource,
    key: String,
    elements: Vec<Values>,
}

impl<'r> ConfigureSliceMap<'r> {
    pub(super) fn bind<I>(
        resource: &'r mut Resource,
        name: &str,
        source: I,
        options: &MapOptions,
    ) -> Result<Self, MapError>
    where
        I: IntoIterator,
        I::Item: Serialize,
    {
        let mut elements = Vec::new();
        for (index, element) in source.into_iter().enumerate() {
            match normalize(&element, options)? {
                Value::Map(fields) => elements.push(fields),
                other => {
                    return Err(MapError::ElementNotStructLike {
                        index,
                        kind: other.kind(),
                    })
                }
            }
        }

        let key = camel_case(name);
        let rows = vec![Value::empty_map(); elements.len()];
        resource.values_mut().insert(key.clone(), Value::Sequence(rows));

        debug!(key = key.as_str(), elements = elements.len(), "Slice mapping started");

        Ok(Self {
            resource,
            key,
            elements,
        })
    }

    /// Copies `field` from every element into the row at the same index.
    ///
    /// ## Errors
    ///
    /// Returns [`MapError::ElementFieldNotFound`] naming the first element
    /// without the field; no row is changed in that case.
    pub fn map(self, field: &str) -> Result<Self, MapError> {
        let field_key = camel_case(field);

        if let Some(index) = self
            .elements
            .iter()
            .position(|element| !element.contains_key(&field_key))
        {
            debug!(field, index, "Field not found on slice element");
            return Err(MapError::ElementFieldNotFound {
                field: field.to_string(),
                index,
            });
        }

        if let Some(rows) = self
            .resource
            .values_mut()
            .get_mut(&self.key)
            .and_then(Value::as_sequence_mut)
        {
            for (row, element) in rows.iter_mut().zip(&self.elements) {
                if let (Some(row), Some(value)) = (row.as_map_mut(), element.get(&field_key)) {
                    row.insert(field_key.clone(), value.clone());
                }
            }
        }

        Ok(self)
    }

    /// Ends the projection and hands back the resource.
    pub fn end_map(self) -> &'r mut Resource {
        self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueKind;

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Row {
        int_value: i32,
        string_value: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                int_value: 43,
                string_value: "test 1",
            },
            Row {
                int_value: 367,
                string_value: "test 2",
            },
        ]
    }

    #[test]
    fn test_installs_empty_rows() {
        let mut resource = Resource::default();
        resource.map_slice_from("Structs", &rows()).unwrap();

        let rows = resource.get("structs").unwrap().as_sequence().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.as_map().is_some_and(Values::is_empty)));
    }

    #[test]
    fn test_projects_selected_columns() {
        let mut resource = Resource::default();
        resource
            .map_slice_from("structs", &rows())
            .unwrap()
            .map("IntValue")
            .unwrap();

        let rows = resource.get("structs").unwrap().as_sequence().unwrap();
        let first = rows[0].as_map().unwrap();
        assert_eq!(first["intValue"].as_i64(), Some(43));
        assert!(!first.contains_key("stringValue"));
        assert_eq!(rows[1].as_map().unwrap()["intValue"].as_i64(), Some(367));
    }

    #[test]
    fn test_missing_column_changes_nothing() {
        let mut resource = Resource::default();
        let err = resource
            .map_slice_from("structs", &rows())
            .unwrap()
            .map("IntValue")
            .unwrap()
            .map("Nope")
            .err()
            .unwrap();

        assert!(matches!(err, MapError::ElementFieldNotFound { index: 0, .. }));
        let rows = resource.get("structs").unwrap().as_sequence().unwrap();
        assert_eq!(rows[0].as_map().unwrap().len(), 1);
    }

    #[test]
    fn test_scalar_elements_rejected() {
        let mut resource = Resource::default();
        let err = resource
            .map_slice_from("strings", ["a", "b"])
            .err()
            .unwrap();

        assert!(matches!(
            err,
            MapError::ElementNotStructLike {
                index: 0,
                kind: ValueKind::String
            }
        ));
        assert!(resource.get("strings").is_none());
    }

    #[test]
    fn test_empty_collection() {
        let mut resource = Resource::default();
        resource
            .map_slice_from("items", Vec::<Row>::new())
            .unwrap()
            .map("IntValue")
            .unwrap();

        let rows = resource.get("items").unwrap().as_sequence().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_end_map_continues_chain() {
        let mut resource = Resource::default();
        resource
            .map_slice_from("structs", &rows())
            .unwrap()
            .end_map()
            .set("count", 2);
        assert_eq!(resource.get("count").and_then(Value::as_i64), Some(2));
    }
}
