//! The canonical JSON writer.
//!
//! Layout comes from `serde_json`'s own formatters. [`CanonicalFormatter`]
//! only replaces the float text with [`format_number`].

use crate::number::format_number;
use crate::options::FormatOptions;
use crate::value::Value;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use shock_common::limits::MAX_SERIALIZE_DEPTH;
use shock_common::{ValueError, ValueResult};
use std::io;
use tracing::trace;

/// Serialize `value` as compact canonical JSON.
pub fn serialize(value: &Value) -> ValueResult<String> {
    write_with(value, CanonicalFormatter(CompactFormatter))
}

/// Serialize `value`, pretty-printing it with `options` when it is a record.
///
/// Any other top-level value is written compactly; a record nested in a
/// top-level array is not pretty-printed either.
pub fn serialize_with(value: &Value, options: &FormatOptions) -> ValueResult<String> {
    let indent = options.indent_unit();
    match value {
        Value::Record(_) if !indent.is_empty() => write_with(
            value,
            CanonicalFormatter(PrettyFormatter::with_indent(indent.as_bytes())),
        ),
        _ => serialize(value),
    }
}

/// Parse JSON text into a [`Value`]. Every number becomes [`Value::Number`].
pub fn parse(text: &str) -> ValueResult<Value> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from(json))
}

fn write_with<F: Formatter>(value: &Value, formatter: F) -> ValueResult<String> {
    if exceeds_depth(value, MAX_SERIALIZE_DEPTH) {
        trace!(limit = MAX_SERIALIZE_DEPTH, "value nesting too deep");
        return Err(ValueError::NestingTooDeep {
            limit: MAX_SERIALIZE_DEPTH,
        });
    }
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Whether arrays and records nest more than `limit` levels deep.
fn exceeds_depth(value: &Value, limit: usize) -> bool {
    match value {
        Value::Array(items) => {
            limit == 0 || items.iter().any(|item| exceeds_depth(item, limit - 1))
        }
        Value::Record(entries) => {
            limit == 0 || entries.values().any(|item| exceeds_depth(item, limit - 1))
        }
        _ => false,
    }
}

/// Wraps a `serde_json` formatter, writing finite floats as [`format_number`]
/// text. Non-finite floats never get here; `serde_json` writes them as `null`.
struct CanonicalFormatter<F>(F);

impl<F: Formatter> Formatter for CanonicalFormatter<F> {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_number(value).as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_value(writer)
    }
}

#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod tests;
