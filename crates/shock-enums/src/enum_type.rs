//! Plain enum types: closed sets of named, integer-coded constants.
//!
//! An [`EnumType`] is declared once from a list of constant specs and owns
//! every instance it hands out. Instances ([`EnumValue`]) share the type's
//! definition through an `Arc`, so they are cheap to clone and always know
//! their display name.
//!
//! Auto-numbering starts at 0 and continues from the previous resolved code:
//!
//! ```
//! use shock_enums::define_enum;
//!
//! let color = define_enum("Color", ["RED", "GREEN", "BLUE"]).unwrap();
//! assert_eq!(color.lookup("green").unwrap().number(), 1);
//! assert_eq!(color.lookup(2).unwrap().to_string(), "blue");
//! ```

use crate::markers::DeclarationMarkers;
use crate::spec::{ConstantSpecInput, resolve_declarations};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use shock_common::limits::ENUM_COUNTER_START;
use shock_common::{ValueError, ValueResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug)]
struct EnumDef {
    name: String,
    /// Display name -> (property key, code), in declaration order.
    by_name: IndexMap<String, (String, i64)>,
    /// Property key -> code.
    by_key: FxHashMap<String, i64>,
}

impl EnumDef {
    /// Index (into `by_name`) of the first declared constant with `code`.
    fn first_with_code(&self, code: i64) -> Option<usize> {
        self.by_name.values().position(|(_, c)| *c == code)
    }
}

/// A declared enum type.
#[derive(Clone, Debug)]
pub struct EnumType {
    def: Arc<EnumDef>,
}

/// An instance of an [`EnumType`].
///
/// Equality is by owning type and code.
#[derive(Clone)]
pub struct EnumValue {
    def: Arc<EnumDef>,
    code: i64,
}

/// Anything an enum lookup accepts.
#[derive(Clone, Debug)]
pub enum EnumArg<'a> {
    Value(EnumValue),
    Name(&'a str),
    /// A number already reduced to its 32-bit unsigned pattern.
    Number(u32),
}

/// Declare an enum type.
///
/// Fails with [`ValueError::InvalidConstantSpec`] when any declaration has an
/// unrecognized shape.
pub fn define_enum<I>(name: &str, specs: I) -> ValueResult<EnumType>
where
    I: IntoIterator,
    I::Item: Into<ConstantSpecInput>,
{
    let resolved = resolve_declarations(name, specs, ENUM_COUNTER_START, |v| v.saturating_add(1))?;

    let mut by_name = IndexMap::with_capacity(resolved.len());
    let mut by_key = FxHashMap::default();
    for spec in resolved {
        by_key.insert(spec.property_key.clone(), spec.value);
        by_name.insert(spec.display_name, (spec.property_key, spec.value));
    }

    debug!(type_name = name, constants = by_name.len(), "declared enum");

    Ok(EnumType {
        def: Arc::new(EnumDef {
            name: name.to_string(),
            by_name,
            by_key,
        }),
    })
}

impl EnumType {
    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn markers(&self) -> DeclarationMarkers {
        DeclarationMarkers::ENUM
    }

    fn value_of(&self, code: i64) -> EnumValue {
        EnumValue {
            def: Arc::clone(&self.def),
            code,
        }
    }

    /// Property-style access by the key the constant was declared with.
    pub fn constant(&self, property_key: &str) -> Option<EnumValue> {
        self.def
            .by_key
            .get(property_key)
            .map(|&code| self.value_of(code))
    }

    /// Lookup by exact display name.
    pub fn by_name(&self, name: &str) -> Option<EnumValue> {
        self.def
            .by_name
            .get(name)
            .map(|&(_, code)| self.value_of(code))
    }

    /// Lookup by number: the first declared constant whose code equals the
    /// 32-bit unsigned pattern of `number`.
    pub fn by_number(&self, number: i64) -> Option<EnumValue> {
        self.by_pattern(number as u32)
    }

    fn by_pattern(&self, pattern: u32) -> Option<EnumValue> {
        let code = i64::from(pattern);
        self.def.first_with_code(code).map(|_| self.value_of(code))
    }

    /// Coerce `arg` into an instance of this type.
    ///
    /// Instances of this type pass through unchanged. Names must match a
    /// display name exactly. Numbers (and instances of other enum types,
    /// through their code) resolve to the first declared constant with that
    /// 32-bit unsigned pattern.
    pub fn lookup<'a>(&self, arg: impl Into<EnumArg<'a>>) -> ValueResult<EnumValue> {
        match arg.into() {
            EnumArg::Value(value) if Arc::ptr_eq(&value.def, &self.def) => Ok(value),
            EnumArg::Value(foreign) => self.lookup_pattern(foreign.code as u32),
            EnumArg::Name(name) => self.by_name(name).ok_or_else(|| {
                trace!(type_name = %self.def.name, name, "enum name lookup missed");
                ValueError::UnknownConstantName {
                    type_name: self.def.name.clone(),
                    name: name.to_string(),
                }
            }),
            EnumArg::Number(pattern) => self.lookup_pattern(pattern),
        }
    }

    fn lookup_pattern(&self, pattern: u32) -> ValueResult<EnumValue> {
        self.by_pattern(pattern).ok_or_else(|| {
            trace!(type_name = %self.def.name, pattern, "enum number lookup missed");
            ValueError::UnknownConstantValue {
                type_name: self.def.name.clone(),
                value: pattern,
            }
        })
    }

    /// Every declared constant in declaration order.
    pub fn values(&self) -> impl Iterator<Item = EnumValue> + '_ {
        self.def
            .by_name
            .values()
            .map(|&(_, code)| self.value_of(code))
    }

    pub fn len(&self) -> usize {
        self.def.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.def.by_name.is_empty()
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }
}

impl Eq for EnumType {}

impl EnumValue {
    /// The numeric code.
    pub fn number(&self) -> i64 {
        self.code
    }

    /// Display name of the first declared constant sharing this code.
    pub fn name(&self) -> &str {
        self.def
            .first_with_code(self.code)
            .and_then(|index| self.def.by_name.get_index(index))
            .map_or("", |(name, _)| name.as_str())
    }

    /// Property key of the first declared constant sharing this code.
    pub fn property_key(&self) -> &str {
        self.def
            .first_with_code(self.code)
            .and_then(|index| self.def.by_name.get_index(index))
            .map_or("", |(_, (key, _))| key.as_str())
    }

    pub fn enum_type(&self) -> EnumType {
        EnumType {
            def: Arc::clone(&self.def),
        }
    }

    /// Code equality after coercing `other` through this value's type.
    pub fn equals<'a>(&self, other: impl Into<EnumArg<'a>>) -> ValueResult<bool> {
        Ok(self.enum_type().lookup(other)?.code == self.code)
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.def, &other.def) && self.code == other.code
    }
}

impl Eq for EnumValue {}

impl Hash for EnumValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.def).hash(state);
        self.code.hash(state);
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}({})", self.def.name, self.name(), self.code)
    }
}

impl Serialize for EnumValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code)
    }
}

impl From<EnumValue> for EnumArg<'_> {
    fn from(value: EnumValue) -> Self {
        Self::Value(value)
    }
}

impl From<&EnumValue> for EnumArg<'_> {
    fn from(value: &EnumValue) -> Self {
        Self::Value(value.clone())
    }
}

impl<'a> From<&'a str> for EnumArg<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for EnumArg<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl From<i64> for EnumArg<'_> {
    fn from(number: i64) -> Self {
        Self::Number(number as u32)
    }
}

impl From<i32> for EnumArg<'_> {
    fn from(number: i32) -> Self {
        Self::Number(number as u32)
    }
}

impl From<u32> for EnumArg<'_> {
    fn from(number: u32) -> Self {
        Self::Number(number)
    }
}

#[cfg(test)]
#[path = "../tests/enum_type_tests.rs"]
mod tests;
