//! Flags enum types: named bits combinable into composite masks.
//!
//! Auto-numbering starts at 1 and doubles after each resolved value, so
//! undeclared constants occupy consecutive bits. Masks are 32 bits wide and
//! zero is a valid value without a named constant.
//!
//! Lookups accept instances, single names, comma-separated name lists,
//! sequences of any of those, and raw numbers:
//!
//! ```
//! use shock_enums::define_flags_enum;
//!
//! let access = define_flags_enum("Access", ["READ", "WRITE", "EXECUTE"]).unwrap();
//! let rw = access.lookup("write,read").unwrap();
//! assert_eq!(rw.mask(), 0b011);
//! assert_eq!(rw.to_string(), "read,write");
//! assert!(rw.has("write").unwrap());
//! ```

use crate::markers::DeclarationMarkers;
use crate::spec::{ConstantSpecInput, resolve_declarations};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use shock_common::limits::FLAGS_COUNTER_START;
use shock_common::{ValueError, ValueResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, BitXor};
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug)]
struct FlagsDef {
    name: String,
    /// Display name -> (property key, mask), in declaration order.
    by_name: IndexMap<String, (String, u32)>,
    /// Property key -> mask.
    by_key: FxHashMap<String, u32>,
}

/// A declared flags enum type.
#[derive(Clone, Debug)]
pub struct FlagsEnumType {
    def: Arc<FlagsDef>,
}

/// An instance of a [`FlagsEnumType`]: one 32-bit mask.
///
/// Every combinator returns a new instance.
#[derive(Clone)]
pub struct FlagsValue {
    def: Arc<FlagsDef>,
    mask: u32,
}

/// Anything a flags lookup accepts.
#[derive(Clone, Debug)]
pub enum FlagsArg<'a> {
    Value(FlagsValue),
    /// A single name, or a comma-separated list of names.
    Text(&'a str),
    /// A number already reduced to its 32-bit unsigned pattern.
    Bits(u32),
    /// Combined with bitwise OR.
    List(Vec<FlagsArg<'a>>),
}

/// Declare a flags enum type.
///
/// Fails with [`ValueError::InvalidConstantSpec`] when any declaration has an
/// unrecognized shape.
pub fn define_flags_enum<I>(name: &str, specs: I) -> ValueResult<FlagsEnumType>
where
    I: IntoIterator,
    I::Item: Into<ConstantSpecInput>,
{
    let resolved = resolve_declarations(name, specs, FLAGS_COUNTER_START, |v| {
        v.wrapping_mul(2)
    })?;

    let mut by_name = IndexMap::with_capacity(resolved.len());
    let mut by_key = FxHashMap::default();
    for spec in resolved {
        let mask = spec.value as u32;
        by_key.insert(spec.property_key.clone(), mask);
        by_name.insert(spec.display_name, (spec.property_key, mask));
    }

    debug!(type_name = name, constants = by_name.len(), "declared flags enum");

    Ok(FlagsEnumType {
        def: Arc::new(FlagsDef {
            name: name.to_string(),
            by_name,
            by_key,
        }),
    })
}

impl FlagsEnumType {
    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn markers(&self) -> DeclarationMarkers {
        DeclarationMarkers::ENUM | DeclarationMarkers::FLAGS_ENUM
    }

    /// The instance holding `mask`. Every mask is representable.
    pub fn value_of(&self, mask: u32) -> FlagsValue {
        FlagsValue {
            def: Arc::clone(&self.def),
            mask,
        }
    }

    /// The zero mask.
    pub fn empty(&self) -> FlagsValue {
        self.value_of(0)
    }

    /// Every declared bit combined.
    pub fn all(&self) -> FlagsValue {
        self.value_of(self.def.by_name.values().fold(0, |acc, &(_, m)| acc | m))
    }

    /// Property-style access by the key the constant was declared with.
    pub fn constant(&self, property_key: &str) -> Option<FlagsValue> {
        self.def
            .by_key
            .get(property_key)
            .map(|&mask| self.value_of(mask))
    }

    /// Lookup by exact display name.
    pub fn by_name(&self, name: &str) -> Option<FlagsValue> {
        self.def
            .by_name
            .get(name)
            .map(|&(_, mask)| self.value_of(mask))
    }

    /// Coerce `arg` into an instance of this type.
    ///
    /// Text without a comma must name a declared constant. Text with commas
    /// is split and every non-empty segment must name a constant; their bits
    /// are combined, so `"a,,b,"` is `a | b` and `","` is the zero mask.
    /// Sequences combine their coerced elements; an empty sequence is zero.
    pub fn lookup<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<FlagsValue> {
        match arg.into() {
            FlagsArg::Value(value) if Arc::ptr_eq(&value.def, &self.def) => Ok(value),
            arg => self.mask_of(arg).map(|mask| self.value_of(mask)),
        }
    }

    fn mask_of(&self, arg: FlagsArg<'_>) -> ValueResult<u32> {
        match arg {
            FlagsArg::Value(value) => Ok(value.mask),
            FlagsArg::Bits(mask) => Ok(mask),
            FlagsArg::Text(text) if !text.contains(',') => self.named_mask(text),
            FlagsArg::Text(text) => text
                .split(',')
                .filter(|segment| !segment.is_empty())
                .try_fold(0u32, |acc, segment| -> ValueResult<u32> {
                    Ok(acc | self.named_mask(segment)?)
                }),
            FlagsArg::List(items) => items
                .into_iter()
                .try_fold(0u32, |acc, item| -> ValueResult<u32> {
                    Ok(acc | self.mask_of(item)?)
                }),
        }
    }

    fn named_mask(&self, name: &str) -> ValueResult<u32> {
        match self.def.by_name.get(name) {
            Some(&(_, mask)) => Ok(mask),
            None => {
                trace!(type_name = %self.def.name, name, "flags name lookup missed");
                Err(ValueError::UnknownConstantName {
                    type_name: self.def.name.clone(),
                    name: name.to_string(),
                })
            }
        }
    }

    /// Every declared constant in declaration order.
    pub fn values(&self) -> impl Iterator<Item = FlagsValue> + '_ {
        self.def
            .by_name
            .values()
            .map(|&(_, mask)| self.value_of(mask))
    }

    pub fn len(&self) -> usize {
        self.def.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.def.by_name.is_empty()
    }
}

impl PartialEq for FlagsEnumType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }
}

impl Eq for FlagsEnumType {}

impl FlagsValue {
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// The mask as a number.
    pub fn number(&self) -> i64 {
        i64::from(self.mask)
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn flags_type(&self) -> FlagsEnumType {
        FlagsEnumType {
            def: Arc::clone(&self.def),
        }
    }

    fn derive(&self, mask: u32) -> Self {
        Self {
            def: Arc::clone(&self.def),
            mask,
        }
    }

    fn coerce<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<u32> {
        self.flags_type().mask_of(arg.into())
    }

    /// Bitwise OR.
    pub fn set<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<Self> {
        Ok(self.derive(self.mask | self.coerce(arg)?))
    }

    /// Bitwise XOR.
    pub fn toggle<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<Self> {
        Ok(self.derive(self.mask ^ self.coerce(arg)?))
    }

    /// Bitwise AND.
    pub fn filter<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<Self> {
        Ok(self.derive(self.mask & self.coerce(arg)?))
    }

    /// Remove the bits shared with `arg`.
    ///
    /// Without any overlap this is a no-op. Bits of `arg` that are not set
    /// here are never added, so this is not a symmetric difference.
    pub fn exclude<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<Self> {
        let other = self.coerce(arg)?;
        if self.mask & other == 0 {
            return Ok(self.clone());
        }
        Ok(self.derive(self.mask & !other))
    }

    /// Whether any bit of `arg` is set.
    ///
    /// A multi-bit argument answers "any of", not "all of"; see [`Self::has_all`].
    pub fn has<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<bool> {
        Ok(self.mask & self.coerce(arg)? != 0)
    }

    /// Whether every bit of `arg` is set.
    pub fn has_all<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<bool> {
        let other = self.coerce(arg)?;
        Ok(self.mask & other == other)
    }

    /// Membership test by name, resolved exactly like [`Self::has`].
    pub fn contains(&self, key: &str) -> ValueResult<bool> {
        self.has(key)
    }

    /// Raw mask equality after coercion.
    pub fn equals<'a>(&self, arg: impl Into<FlagsArg<'a>>) -> ValueResult<bool> {
        Ok(self.mask == self.coerce(arg)?)
    }

    /// Display names of every declared constant whose bits intersect this
    /// mask, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.def
            .by_name
            .iter()
            .filter(|(_, (_, mask))| self.mask & mask != 0)
            .map(|(name, _)| name.as_str())
    }
}

impl PartialEq for FlagsValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.def, &other.def) && self.mask == other.mask
    }
}

impl Eq for FlagsValue {}

impl Hash for FlagsValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.def).hash(state);
        self.mask.hash(state);
    }
}

impl fmt::Display for FlagsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FlagsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self}; {:#b})", self.def.name, self.mask)
    }
}

impl Serialize for FlagsValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.mask)
    }
}

// The operators keep the left operand's type.
impl BitOr for FlagsValue {
    type Output = FlagsValue;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.derive(self.mask | rhs.mask)
    }
}

impl BitAnd for FlagsValue {
    type Output = FlagsValue;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.derive(self.mask & rhs.mask)
    }
}

impl BitXor for FlagsValue {
    type Output = FlagsValue;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.derive(self.mask ^ rhs.mask)
    }
}

impl From<FlagsValue> for FlagsArg<'_> {
    fn from(value: FlagsValue) -> Self {
        Self::Value(value)
    }
}

impl From<&FlagsValue> for FlagsArg<'_> {
    fn from(value: &FlagsValue) -> Self {
        Self::Value(value.clone())
    }
}

impl<'a> From<&'a str> for FlagsArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for FlagsArg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl From<u32> for FlagsArg<'_> {
    fn from(bits: u32) -> Self {
        Self::Bits(bits)
    }
}

impl From<i32> for FlagsArg<'_> {
    fn from(bits: i32) -> Self {
        Self::Bits(bits as u32)
    }
}

impl From<i64> for FlagsArg<'_> {
    fn from(bits: i64) -> Self {
        Self::Bits(bits as u32)
    }
}

impl<'a, T: Into<FlagsArg<'a>>> From<Vec<T>> for FlagsArg<'a> {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<FlagsArg<'a>>, const N: usize> From<[T; N]> for FlagsArg<'a> {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[path = "../tests/flags_type_tests.rs"]
mod tests;
