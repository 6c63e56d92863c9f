//! Value types for closed constant sets and fixed-width integers.
//!
//! This crate re-exports the public API of the shock workspace:
//!
//! - [`define_enum`] / [`define_flags_enum`] declare enum and flags enum types
//! - [`Int32`], [`UInt32`], [`Int64`], [`UInt64`] saturate instead of overflowing
//! - [`serialize`], [`serialize_with`] and [`parse`] handle canonical JSON text
//!
//! ```
//! use shock_core::{Value, define_flags_enum, serialize};
//!
//! let perms = define_flags_enum("Perms", ["READ", "WRITE", "EXEC"]).unwrap();
//! let rw = perms.lookup("read,write").unwrap();
//! assert_eq!(rw.to_string(), "read,write");
//! assert_eq!(serialize(&Value::from(&rw)).unwrap(), "3");
//! ```

pub use shock_common::tracing_config::init_tracing;
pub use shock_common::{ValueError, ValueResult, limits};

pub use shock_enums::{
    ConstantSpec, ConstantSpecInput, DeclarationMarkers, EnumArg, EnumType, EnumValue, FlagsArg,
    FlagsEnumType, FlagsValue, SpecItem, define_enum, define_flags_enum, normalize_constant_name,
};

pub use shock_int::{Bounded, Int32, Int64, IntegerOperand, UInt32, UInt64, Width};

pub use shock_json::{FormatOptions, Indent, Value, format_number, parse, serialize, serialize_with};
