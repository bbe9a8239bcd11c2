//! Values paired with a display rendering.

use super::{Value, ValueKind};

/// A raw value together with its rendered display string.
///
/// The formatter runs once, at construction, so the data is immutable from
/// then on: [`raw`](Self::raw) keeps the value for programmatic use and
/// [`rendered`](Self::rendered) is what encoders and presentation emit.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::FormattedData;
///
/// let fd = FormattedData::new(4234.3982, |n| format!("{n:.2}"));
/// assert_eq!(fd.rendered(), "4234.40");
/// assert_eq!(fd.raw().as_f64(), Some(4234.3982));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedData {
    raw: Box<Value>,
    rendered: String,
}

impl FormattedData {
    /// Renders `raw` with `formatter` and keeps both.
    pub fn new<T, F>(raw: T, formatter: F) -> Self
    where
        T: Into<Value>,
        F: FnOnce(&T) -> String,
    {
        let rendered = formatter(&raw);
        Self {
            raw: Box::new(raw.into()),
            rendered,
        }
    }

    /// The value before formatting.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The formatted display string.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Runtime kind of the raw value; decides JSON quoting.
    pub fn raw_kind(&self) -> ValueKind {
        self.raw.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        let fd = FormattedData::new(982.4332, |v| format!("{v:.2}"));
        assert_eq!(fd.rendered(), "982.43");
        assert_eq!(fd.raw(), &Value::from(982.4332));
        assert_eq!(fd.raw_kind(), ValueKind::Float);
    }

    #[test]
    fn test_formatter_over_value() {
        let raw = Value::from(7);
        let fd = FormattedData::new(raw, |v: &Value| format!("#{v}"));
        assert_eq!(fd.rendered(), "#7");
        assert_eq!(fd.raw_kind(), ValueKind::Integer);
    }

    #[test]
    fn test_string_raw() {
        let fd = FormattedData::new("alice", |s| s.to_uppercase());
        assert_eq!(fd.rendered(), "ALICE");
        assert!(fd.raw_kind().is_string_like());
    }
}
