//! Constant declarations and their resolution.
//!
//! A declaration is either a bare property key (`"SOME_CONST"`) or a list
//! whose first element is the property key and whose remaining elements
//! override the display name and/or the numeric value, in either order:
//!
//! ```text
//! "READ"                       -> ("READ", "read", counter)
//! ["READ", "r"]                -> ("READ", "r", counter)
//! ["READ", 4]                  -> ("READ", "read", 4)
//! ["READ", 4, "r"]             -> ("READ", "r", 4)
//! ["READ", ["r", 4]]           -> ("READ", "r", 4)
//! ["READ", 4.0]                -> ("READ", "read", 4)
//! ["READ", 4.5]                -> invalid
//! ```

use crate::naming::normalize_constant_name;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use shock_common::{ValueError, ValueResult};
use tracing::trace;

/// One element of a list-form declaration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SpecItem {
    Text(String),
    Number(i64),
    /// A JSON number without an `i64` reading (`3.0`, `1e3`). Only integral
    /// values are usable as an override.
    Float(f64),
    List(Vec<SpecItem>),
    /// Anything else a JSON declaration may contain; never matches an override.
    Other(serde_json::Value),
}

impl SpecItem {
    /// `Some` for numeric items, holding the exact `i64` value if there is one.
    fn as_number(&self) -> Option<Option<i64>> {
        match self {
            Self::Number(n) => Some(Some(*n)),
            Self::Float(f) => Some(integral_value(*f)),
            _ => None,
        }
    }
}

fn integral_value(f: f64) -> Option<i64> {
    // i64::MIN is exactly -2^63; i64::MAX rounds up to 2^63.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// A constant declaration as written by the consumer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConstantSpecInput {
    Name(String),
    List(Vec<SpecItem>),
    /// A shape no declaration can take; resolving it fails.
    Other(serde_json::Value),
}

/// A fully resolved constant declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantSpec {
    /// Key for property-style access (`Color::RED` style lookups).
    pub property_key: String,
    /// Name used for display and name lookup.
    pub display_name: String,
    pub value: i64,
}

impl ConstantSpecInput {
    /// Resolve against the running `counter`.
    ///
    /// Returns `None` when the declaration has no recognizable shape.
    #[must_use]
    pub fn resolve(&self, counter: i64) -> Option<ConstantSpec> {
        match self {
            Self::Name(key) => Some(ConstantSpec {
                property_key: key.clone(),
                display_name: normalize_constant_name(key),
                value: counter,
            }),
            Self::List(items) => {
                let (SpecItem::Text(key), rest) = items.split_first()? else {
                    return None;
                };
                let overrides = match rest.first() {
                    Some(SpecItem::List(nested)) => nested.as_slice(),
                    _ => rest,
                };

                let display_name = overrides.iter().find_map(|item| match item {
                    SpecItem::Text(text) => Some(text.clone()),
                    _ => None,
                });
                // The first number decides the value; a fractional one makes
                // the whole declaration invalid.
                let value = match overrides.iter().find_map(SpecItem::as_number) {
                    Some(number) => number?,
                    None => counter,
                };

                Some(ConstantSpec {
                    property_key: key.clone(),
                    display_name: display_name.unwrap_or_else(|| normalize_constant_name(key)),
                    value,
                })
            }
            Self::Other(_) => None,
        }
    }
}

/// Resolve every declaration of a type in order.
///
/// `counter` seeds the first undeclared value; `advance` computes the next
/// counter from each resolved value. A display name may be declared only
/// once, so every property key resolves to a constant that has a name.
pub(crate) fn resolve_declarations<I>(
    type_name: &str,
    specs: I,
    mut counter: i64,
    advance: impl Fn(i64) -> i64,
) -> ValueResult<Vec<ConstantSpec>>
where
    I: IntoIterator,
    I::Item: Into<ConstantSpecInput>,
{
    let invalid = |index| ValueError::InvalidConstantSpec {
        type_name: type_name.to_string(),
        index,
    };

    let mut resolved = Vec::new();
    let mut display_names = FxHashSet::default();
    for (index, input) in specs.into_iter().enumerate() {
        let input = input.into();
        let Some(spec) = input.resolve(counter) else {
            return Err(invalid(index));
        };
        if !display_names.insert(spec.display_name.clone()) {
            trace!(type_name, display_name = %spec.display_name, "display name declared twice");
            return Err(invalid(index));
        }
        trace!(
            type_name,
            property_key = %spec.property_key,
            display_name = %spec.display_name,
            value = spec.value,
            "resolved constant"
        );
        counter = advance(spec.value);
        resolved.push(spec);
    }
    Ok(resolved)
}

impl From<&str> for SpecItem {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SpecItem {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for SpecItem {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<i64> for SpecItem {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl<T: Into<SpecItem>> From<Vec<T>> for SpecItem {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for ConstantSpecInput {
    fn from(key: &str) -> Self {
        Self::Name(key.to_string())
    }
}

impl From<String> for ConstantSpecInput {
    fn from(key: String) -> Self {
        Self::Name(key)
    }
}

impl From<Vec<SpecItem>> for ConstantSpecInput {
    fn from(items: Vec<SpecItem>) -> Self {
        Self::List(items)
    }
}

impl From<(&str, &str)> for ConstantSpecInput {
    fn from((key, name): (&str, &str)) -> Self {
        Self::List(vec![key.into(), name.into()])
    }
}

impl From<(&str, i64)> for ConstantSpecInput {
    fn from((key, value): (&str, i64)) -> Self {
        Self::List(vec![key.into(), value.into()])
    }
}

impl From<(&str, &str, i64)> for ConstantSpecInput {
    fn from((key, name, value): (&str, &str, i64)) -> Self {
        Self::List(vec![key.into(), name.into(), value.into()])
    }
}

impl From<(&str, i64, &str)> for ConstantSpecInput {
    fn from((key, value, name): (&str, i64, &str)) -> Self {
        Self::List(vec![key.into(), value.into(), name.into()])
    }
}

#[cfg(test)]
#[path = "../tests/spec_tests.rs"]
mod tests;
