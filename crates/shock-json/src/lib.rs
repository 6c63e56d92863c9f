//! Canonical JSON text for shock values.
//!
//! Values are first converted into a [`Value`] tree and then written by a
//! single printer:
//!
//! - strings, numbers, booleans and null become their native JSON literal
//! - enum, flags and bounded integer instances become their decimal code
//! - records keep insertion order and drop absent properties
//! - [`serialize_with`] pretty-prints a top-level record
//!
//! ```
//! use shock_json::{FormatOptions, Value, serialize, serialize_with};
//!
//! let record = Value::record([("id", Value::from(7)), ("tags", Value::from(vec!["a"]))]);
//! assert_eq!(serialize(&record).unwrap(), r#"{"id":7,"tags":["a"]}"#);
//! assert_eq!(
//!     serialize_with(&record, &FormatOptions::spaces(2)).unwrap(),
//!     "{\n  \"id\": 7,\n  \"tags\": [\n    \"a\"\n  ]\n}"
//! );
//! ```

mod number;
mod options;
mod printer;
mod value;

pub use number::format_number;
pub use options::{FormatOptions, Indent};
pub use printer::{parse, serialize, serialize_with};
pub use value::Value;
