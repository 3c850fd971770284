//! Typed deserialization of parsed documents.
//!
//! [`Value`] implements [`serde::Deserializer`], so a parsed document can be
//! read straight into any `T: Deserialize`. Most users go through
//! [`from_str`](crate::from_str):
//!
//! ```rust
//! use lightconf::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Fixture {
//!     channel: u16,
//!     color: String,
//! }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Rig {
//!     spot: Fixture,
//! }
//!
//! let rig: Rig = from_str("spot { channel: 12; color: @xFFAA00 }").unwrap();
//! assert_eq!(rig.spot, Fixture { channel: 12, color: "0xFFAA00".to_string() });
//! ```
//!
//! The language has no sequences, so `Vec<T>` and tuples cannot be read.
//! Enums are read from a string naming a unit variant, or from a single-key
//! mapping naming a variant and holding its content.

use crate::{Error, Map, Result, Value};
use serde::de::value::{MapDeserializer, StringDeserializer};
use serde::de::{self, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Boolean(b) => visitor.visit_bool(b),
            Value::Integer(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Mapping(map) => visit_mapping(map, visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(variant) => visitor.visit_enum(variant.into_deserializer()),
            Value::Mapping(map) if map.len() == 1 => {
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((variant, content)) => {
                        visitor.visit_enum(EnumDeserializer { variant, content })
                    }
                    None => Err(Error::type_mismatch("enum", "empty mapping")),
                }
            }
            other => Err(Error::type_mismatch("enum", other.kind())),
        }
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::type_mismatch("sequence", self.kind()))
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct map struct identifier ignored_any
    }
}

fn visit_mapping<'de, V>(map: Map, visitor: V) -> Result<V::Value>
where
    V: Visitor<'de>,
{
    let mut access: MapDeserializer<'de, _, Error> = MapDeserializer::new(map.into_iter());
    let value = visitor.visit_map(&mut access)?;
    access.end()?;
    Ok(value)
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

struct EnumDeserializer {
    variant: String,
    content: Value,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, VariantDeserializer)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let name: StringDeserializer<Error> = self.variant.into_deserializer();
        let variant = seed.deserialize(name)?;
        Ok((variant, VariantDeserializer { content: self.content }))
    }
}

struct VariantDeserializer {
    content: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.content {
            Value::Null => Ok(()),
            other => Err(Error::type_mismatch("unit variant", other.kind())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.content)
    }

    fn tuple_variant<V>(self, _len: usize, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::type_mismatch("tuple variant", self.content.kind()))
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.content {
            Value::Mapping(map) => visit_mapping(map, visitor),
            other => Err(Error::type_mismatch("struct variant", other.kind())),
        }
    }
}
