//! Typed values produced by the parser.
//!
//! Every scalar token that follows a `:` is classified into one of the
//! [`Value`] variants by [`coerce`](crate::coerce()); every `{ ... }` block
//! becomes a [`Value::Mapping`]. The enum is closed: consumers match all six
//! variants.
//!
//! ## Examples
//!
//! ```rust
//! use lightconf::{parse, Value};
//!
//! let doc = parse("dimmer: 0.75\nlabel: \"front wash\"\nenabled: TRUE");
//!
//! assert_eq!(doc.get("dimmer"), Some(&Value::Float(0.75)));
//! assert_eq!(doc.get("label").and_then(Value::as_str), Some("front wash"));
//! assert_eq!(doc.get("enabled").and_then(Value::as_bool), Some(true));
//! ```

use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed value of the configuration language.
///
/// # Examples
///
/// ```rust
/// use lightconf::Value;
///
/// let null = Value::Null;
/// let num = Value::Integer(42);
/// let text = Value::String("0xFF00".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_integer());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Mapping(Map),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` for both integers and floats.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// Hex literals are strings too:
    ///
    /// ```rust
    /// use lightconf::{coerce, Value};
    ///
    /// assert_eq!(coerce("@x00FF").as_str(), Some("0x00FF"));
    /// assert_eq!(Value::Integer(7).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer, or a float with no fractional part that fits in `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightconf::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Value::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Value::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Map> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_mapping_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the variant, as used in type mismatch messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Number of nested mapping levels, counting this one.
    ///
    /// Scalars have depth 0. Computed without recursion so it is safe on
    /// arbitrarily deep documents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightconf::parse;
    ///
    /// let doc = parse("a { b { c: 1 } }");
    /// assert_eq!(doc.get("a").map(|v| v.depth()), Some(2));
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Value, usize)> = vec![(self, 0)];
        while let Some((value, above)) = pending.pop() {
            if let Value::Mapping(map) = value {
                let level = above + 1;
                deepest = deepest.max(level);
                pending.extend(map.values().map(|child| (child, level)));
            }
        }
        deepest
    }
}

/// Compares mappings by content, key order ignored, using a heap stack so
/// deep documents compare without recursion.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&Value, &Value)> = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            let same = match pair {
                (Value::Null, Value::Null) => true,
                (Value::Boolean(a), Value::Boolean(b)) => a == b,
                (Value::Integer(a), Value::Integer(b)) => a == b,
                (Value::Float(a), Value::Float(b)) => a == b,
                (Value::String(a), Value::String(b)) => a == b,
                (Value::Mapping(a), Value::Mapping(b)) => {
                    if a.len() != b.len() {
                        return false;
                    }
                    for (key, left) in a.iter() {
                        match b.get(key) {
                            Some(right) => pending.push((left, right)),
                            None => return false,
                        }
                    }
                    true
                }
                _ => false,
            };
            if !same {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        crate::JsonWriter::new(&mut buffer, crate::JsonOptions::compact())
            .write_value(self)
            .map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Mapping(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar or a mapping")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Integer(value as i64))
                } else {
                    Ok(Value::String(value.to_string()))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Mapping(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::type_mismatch("integer", value.kind()))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::type_mismatch("number", value.kind()))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| crate::Error::type_mismatch("boolean", value.kind()))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.kind())),
        }
    }
}

impl TryFrom<Value> for Map {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Mapping(map) => Ok(map),
            other => Err(crate::Error::type_mismatch("mapping", other.kind())),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Mapping(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
