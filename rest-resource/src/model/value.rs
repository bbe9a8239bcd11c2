//! The normalized value tree stored in a resource.

use std::fmt;

use indexmap::IndexMap;
use strum::{Display, EnumIter};

use super::FormattedData;

/// An ordered map of camelCase keys to values.
///
/// Used both for a resource's own values and for nested maps produced from
/// structs. Insertion order is kept for JSON; XML sorts keys itself.
pub type Values = IndexMap<String, Value>;

/// Runtime kind of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Formatted,
    Map,
    Sequence,
}

impl ValueKind {
    /// Returns `true` for kinds rendered as quoted text.
    pub fn is_string_like(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Returns `true` for integer and floating point kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl Scalar {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) | Self::UInt(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A normalized value: every runtime value is stored as exactly one of these.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::{Value, ValueKind};
///
/// let value = Value::from(vec!["text 1", "text 2"]);
/// assert_eq!(value.kind(), ValueKind::Sequence);
/// assert_eq!(value.as_sequence().map(|s| s.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String, number, bool or null.
    Scalar(Scalar),
    /// A raw value with its display rendering.
    Formatted(FormattedData),
    /// A nested map produced from a struct or map.
    Map(Values),
    /// An ordered collection.
    Sequence(Vec<Value>),
}

impl Value {
    /// An empty nested map.
    pub fn empty_map() -> Self {
        Self::Map(Values::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(s) => s.kind(),
            Self::Formatted(_) => ValueKind::Formatted,
            Self::Map(_) => ValueKind::Map,
            Self::Sequence(_) => ValueKind::Sequence,
        }
    }

    /// The unformatted value: the raw value of formatted data, `self` otherwise.
    pub fn raw(&self) -> &Value {
        match self {
            Self::Formatted(fd) => fd.raw(),
            other => other,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Int(i)) => Some(*i),
            Self::Scalar(Scalar::UInt(u)) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Scalar(Scalar::UInt(u)) => Some(*u),
            Self::Scalar(Scalar::Int(i)) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Any numeric scalar as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Float(x)) => Some(*x),
            Self::Scalar(Scalar::Int(i)) => Some(*i as f64),
            Self::Scalar(Scalar::UInt(u)) => Some(*u as f64),
            _ => None,
        }
    }

    pub fn as_formatted(&self) -> Option<&FormattedData> {
        match self {
            Self::Formatted(fd) => Some(fd),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Values> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Values> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

/// Default stringification, used wherever no formatter was supplied.
///
/// Formatted data shows its rendered string; sequences and maps show their
/// elements in brackets and braces.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Formatted(fd) => f.write_str(fd.rendered()),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// --- Conversions ---

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<FormattedData> for Value {
    fn from(fd: FormattedData) -> Self {
        Self::Formatted(fd)
    }
}

impl From<Values> for Value {
    fn from(map: Values) -> Self {
        Self::Map(map)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Scalar(Scalar::String(c.to_string()))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Scalar(Scalar::Float(f64::from(x)))
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Self::Scalar(Scalar::Int(i64::from(i)))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(u: $t) -> Self {
                Self::Scalar(Scalar::UInt(u64::from(u)))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(i: isize) -> Self {
        Self::Scalar(Scalar::Int(i as i64))
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Self::Scalar(Scalar::UInt(u as u64))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Scalar(Scalar::Null), Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
