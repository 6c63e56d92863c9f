//! The value tree consumed by the printer.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use shock_enums::{EnumValue, FlagsValue};
use shock_int::{Bounded, Width};
use std::fmt;

/// A serializable value.
///
/// Integers are kept exact in [`Value::Integer`]; this covers primitive
/// integers as well as the numeric codes of enum, flags and bounded integer
/// instances. [`Value::Number`] holds floats, including every number read
/// back by [`parse`](crate::parse).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// No value. Dropped from records, `null` anywhere else.
    Absent,
    Null,
    Bool(bool),
    Number(f64),
    Integer(i128),
    String(String),
    Array(Vec<Value>),
    /// A plain record in insertion order.
    Record(IndexMap<String, Value>),
    /// Any other value, written as its quoted display text.
    Opaque(String),
}

impl Value {
    /// Build a record from `(key, value)` pairs, keeping their order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn record<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Wrap a value that is written through its `Display` text.
    pub fn opaque(value: impl fmt::Display) -> Self {
        Value::Opaque(value.to_string())
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

/// Absent entries are skipped inside records and written as `null` elsewhere.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Integer(i) => serializer.serialize_i128(*i),
            Value::String(s) | Value::Opaque(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Record(entries) => {
                serializer.collect_map(entries.iter().filter(|(_, value)| !value.is_absent()))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

macro_rules! integer_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<IndexMap<String, T>> for Value {
    fn from(entries: IndexMap<String, T>) -> Self {
        Value::record(entries)
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Value::Integer(i128::from(value.number()))
    }
}

impl From<&EnumValue> for Value {
    fn from(value: &EnumValue) -> Self {
        Value::Integer(i128::from(value.number()))
    }
}

impl From<FlagsValue> for Value {
    fn from(value: FlagsValue) -> Self {
        Value::Integer(i128::from(value.mask()))
    }
}

impl From<&FlagsValue> for Value {
    fn from(value: &FlagsValue) -> Self {
        Value::Integer(i128::from(value.mask()))
    }
}

impl<W: Width> From<Bounded<W>> for Value {
    fn from(value: Bounded<W>) -> Self {
        Value::Integer(value.to_i128())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::from(items),
            serde_json::Value::Object(entries) => Value::record(entries),
        }
    }
}

#[cfg(test)]
#[path = "../tests/value_tests.rs"]
mod tests;
