//! Read-only queries for presentation layers (HTML templates and the like).

use crate::model::{Resource, Value};

/// The string a value should be displayed as.
///
/// Formatted data shows its rendered string; everything else uses the
/// default [`Display`](std::fmt::Display) of [`Value`].
///
/// ## Examples
///
/// ```rust
/// use rest_resource::{present::display_string, FormattedData, Value};
///
/// let price = Value::from(FormattedData::new(9.5, |v| format!("${v:.2}")));
/// assert_eq!(display_string(&price), "$9.50");
/// assert_eq!(display_string(&Value::from(3)), "3");
/// ```
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Formatted(fd) => fd.rendered().to_string(),
        other => other.to_string(),
    }
}

/// Every child resource embedded under `name`, whether one or many.
///
/// Encoders still collapse a single child to an object; this view does not.
/// Returns an empty slice when there is no such entry.
pub fn embedded_list<'a>(resource: &'a Resource, name: &str) -> &'a [Resource] {
    resource
        .embedded()
        .get(name)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
