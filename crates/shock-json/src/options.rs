//! Serializer configuration.

use serde::Deserialize;
use shock_common::limits::MAX_INDENT_WIDTH;

/// Indentation per nesting level.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Indent {
    /// That many spaces; 0 means compact output.
    Spaces(usize),
    /// An explicit indent string; empty means compact output.
    Text(String),
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(0)
    }
}

/// Options for [`serialize_with`](crate::serialize_with).
///
/// Loadable from JSON configuration, e.g. `{"indent": 2}` or
/// `{"indent": "\t"}`; a missing `indent` means compact output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    pub indent: Indent,
}

impl FormatOptions {
    pub fn compact() -> Self {
        Self::default()
    }

    pub fn spaces(width: usize) -> Self {
        Self {
            indent: Indent::Spaces(width),
        }
    }

    pub fn text(unit: impl Into<String>) -> Self {
        Self {
            indent: Indent::Text(unit.into()),
        }
    }

    /// The string written once per nesting level, capped at
    /// [`MAX_INDENT_WIDTH`] characters.
    pub fn indent_unit(&self) -> String {
        match &self.indent {
            Indent::Spaces(width) => " ".repeat((*width).min(MAX_INDENT_WIDTH)),
            Indent::Text(unit) => unit.chars().take(MAX_INDENT_WIDTH).collect(),
        }
    }

    pub fn is_compact(&self) -> bool {
        match &self.indent {
            Indent::Spaces(width) => *width == 0,
            Indent::Text(unit) => unit.is_empty(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
