//! Normalization of arbitrary serializable values into the value tree.
//!
//! A private serializer builds [`Value`]s straight from serde's data model.
//! Each node checks its own depth before descending, so a source nested
//! past the limit fails at the limit instead of recursing to its bottom.

use serde::ser::{self, Serialize, Serializer};

use super::MapOptions;
use crate::case::camel_case;
use crate::error::MapError;
use crate::model::{Scalar, Value, Values};

/// Normalizes any serializable value into a [`Value`].
///
/// Structs and maps become nested maps with camelCased keys, sequences,
/// arrays and tuples become sequences, `None` and `()` become null, and
/// scalars pass through. Enum variants with data become a one-key map
/// under the camelCased variant name.
///
/// ## Examples
///
/// ```rust
/// use rest_resource::mapper::{normalize, MapOptions};
///
/// #[derive(serde::Serialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct Item { int_value: i32, tags: Vec<&'static str> }
///
/// let value = normalize(&Item { int_value: 3, tags: vec!["a"] }, &MapOptions::default()).unwrap();
/// let map = value.as_map().unwrap();
/// assert_eq!(map["intValue"].as_i64(), Some(3));
/// assert_eq!(map["tags"].as_sequence().map(|t| t.len()), Some(1));
/// ```
///
/// ## Errors
///
/// Returns an error if serialization fails (e.g. a map with non-string
/// keys), a number is non-finite or out of range, or the value nests
/// deeper than `options.max_depth`.
pub fn normalize<T: Serialize + ?Sized>(source: &T, options: &MapOptions) -> Result<Value, MapError> {
    source.serialize(ValueSerializer {
        depth: 0,
        limit: options.max_depth,
    })
}

/// Serializer producing one [`Value`] at a given nesting depth.
#[derive(Debug, Clone, Copy)]
struct ValueSerializer {
    depth: usize,
    limit: usize,
}

impl ValueSerializer {
    fn nested(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    fn checked(self) -> Result<Self, MapError> {
        if self.depth > self.limit {
            return Err(MapError::DepthLimitExceeded { limit: self.limit });
        }
        Ok(self)
    }

    fn scalar(self, scalar: Scalar) -> Result<Value, MapError> {
        self.checked()?;
        Ok(Value::Scalar(scalar))
    }
}

/// Struct name serde_json uses to pass number literals under `arbitrary_precision`.
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

fn unrepresentable(literal: impl ToString) -> MapError {
    MapError::UnrepresentableNumber {
        literal: literal.to_string(),
    }
}

fn literal_number(literal: &str) -> Result<Scalar, MapError> {
    let n: serde_json::Number = literal.parse().map_err(|_| unrepresentable(literal))?;
    if let Some(i) = n.as_i64() {
        Ok(Scalar::Int(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Scalar::UInt(u))
    } else if let Some(x) = n.as_f64().filter(|x| x.is_finite()) {
        Ok(Scalar::Float(x))
    } else {
        Err(unrepresentable(literal))
    }
}

/// Wraps `value` in a one-key map named after an enum variant.
fn tagged(variant: &str, value: Value) -> Value {
    let mut values = Values::with_capacity(1);
    values.insert(camel_case(variant), value);
    Value::Map(values)
}

/// Map keys must normalize to a string or a scalar with a plain rendering.
fn map_key(key: Value) -> Result<String, MapError> {
    match key {
        Value::Scalar(Scalar::String(s)) => Ok(s),
        Value::Scalar(scalar @ (Scalar::Bool(_) | Scalar::Int(_) | Scalar::UInt(_) | Scalar::Float(_))) => {
            Ok(scalar.to_string())
        }
        other => Err(ser::Error::custom(format_args!(
            "map key must be a string, found {}",
            other.kind()
        ))),
    }
}

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = MapError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = SeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = MapBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, MapError> {
        self.scalar(Scalar::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, MapError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, MapError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, MapError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, MapError> {
        self.scalar(Scalar::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, MapError> {
        if let Ok(i) = i64::try_from(v) {
            self.serialize_i64(i)
        } else if let Ok(u) = u64::try_from(v) {
            self.serialize_u64(u)
        } else {
            Err(unrepresentable(v))
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value, MapError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, MapError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, MapError> {
        self.serialize_u64(u64::from(v))
    }

    // Unsigned values that fit are stored signed, like parsed JSON numbers.
    fn serialize_u64(self, v: u64) -> Result<Value, MapError> {
        self.scalar(i64::try_from(v).map_or(Scalar::UInt(v), Scalar::Int))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, MapError> {
        match u64::try_from(v) {
            Ok(u) => self.serialize_u64(u),
            Err(_) => Err(unrepresentable(v)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value, MapError> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, MapError> {
        if !v.is_finite() {
            return Err(unrepresentable(v));
        }
        self.scalar(Scalar::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, MapError> {
        self.scalar(Scalar::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, MapError> {
        self.scalar(Scalar::String(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, MapError> {
        let element = self.checked()?.nested();
        v.iter()
            .map(|b| element.serialize_u8(*b))
            .collect::<Result<_, _>>()
            .map(Value::Sequence)
    }

    fn serialize_none(self) -> Result<Value, MapError> {
        self.serialize_unit()
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, MapError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, MapError> {
        self.scalar(Scalar::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, MapError> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, MapError> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, MapError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, MapError> {
        let inner = value.serialize(self.checked()?.nested())?;
        Ok(tagged(variant, inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, MapError> {
        Ok(SeqBuilder::new(self.checked()?, len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, MapError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqBuilder, MapError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, MapError> {
        let container = self.checked()?.nested().checked()?;
        Ok(SeqBuilder::new(container, len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder, MapError> {
        Ok(MapBuilder::new(self.checked()?, len.unwrap_or(0), None))
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<MapBuilder, MapError> {
        let container = self.checked()?;
        let mut builder = MapBuilder::new(container, len, None);
        if name == NUMBER_TOKEN {
            // The literal is a scalar at this level, not a nested field.
            builder.element = container;
            builder.literal = true;
        }
        Ok(builder)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<MapBuilder, MapError> {
        let container = self.checked()?.nested().checked()?;
        Ok(MapBuilder::new(container, len, Some(variant)))
    }
}

/// Collects sequence, tuple and tuple-variant elements.
struct SeqBuilder {
    items: Vec<Value>,
    element: ValueSerializer,
    variant: Option<&'static str>,
}

impl SeqBuilder {
    fn new(container: ValueSerializer, capacity: usize, variant: Option<&'static str>) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            element: container.nested(),
            variant,
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MapError> {
        self.items.push(value.serialize(self.element)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let items = Value::Sequence(self.items);
        match self.variant {
            Some(variant) => tagged(variant, items),
            None => items,
        }
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = MapError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MapError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, MapError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = MapError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MapError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, MapError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = MapError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MapError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, MapError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SeqBuilder {
    type Ok = Value;
    type Error = MapError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MapError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, MapError> {
        Ok(self.finish())
    }
}

/// Collects map, struct and struct-variant entries under camelCased keys.
struct MapBuilder {
    values: Values,
    element: ValueSerializer,
    pending_key: Option<String>,
    variant: Option<&'static str>,
    literal: bool,
}

impl MapBuilder {
    fn new(container: ValueSerializer, capacity: usize, variant: Option<&'static str>) -> Self {
        Self {
            values: Values::with_capacity(capacity),
            element: container.nested(),
            pending_key: None,
            variant,
            literal: false,
        }
    }

    fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), MapError> {
        let value = value.serialize(self.element)?;
        self.values.insert(camel_case(key), value);
        Ok(())
    }

    fn finish(self) -> Result<Value, MapError> {
        if self.literal {
            return match self.values.into_values().next() {
                Some(Value::Scalar(Scalar::String(literal))) => literal_number(&literal).map(Value::Scalar),
                _ => Err(ser::Error::custom("malformed number literal")),
            };
        }

        let values = Value::Map(self.values);
        Ok(match self.variant {
            Some(variant) => tagged(variant, values),
            None => values,
        })
    }
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = MapError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), MapError> {
        self.pending_key = Some(map_key(key.serialize(self.element)?)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MapError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| <MapError as ser::Error>::custom("map value serialized before its key"))?;
        self.insert(&key, value)
    }

    fn end(self) -> Result<Value, MapError> {
        self.finish()
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = Value;
    type Error = MapError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), MapError> {
        self.insert(key, value)
    }

    fn end(self) -> Result<Value, MapError> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for MapBuilder {
    type Ok = Value;
    type Error = MapError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), MapError> {
        self.insert(key, value)
    }

    fn end(self) -> Result<Value, MapError> {
        self.finish()
    }
}
