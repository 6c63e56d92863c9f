//! Runtime-declared enum and flags enum types.
//!
//! A consumer declares a closed set of named constants once, typically at
//! startup, and then looks instances up by name, by number, or (for flags)
//! by any combination of those:
//!
//! - [`define_enum`]: mutually exclusive integer-coded constants, numbered
//!   0, 1, 2, ... unless overridden
//! - [`define_flags_enum`]: bit constants, numbered 1, 2, 4, ... unless
//!   overridden, combinable into composite masks
//!
//! Declarations are bare property keys (`"MAX_RETRY_COUNT"`, displayed as
//! `maxRetryCount`) or lists overriding the display name and/or value; see
//! [`ConstantSpecInput`].

mod enum_type;
mod flags_type;
mod markers;
mod naming;
mod spec;

pub use enum_type::{EnumArg, EnumType, EnumValue, define_enum};
pub use flags_type::{FlagsArg, FlagsEnumType, FlagsValue, define_flags_enum};
pub use markers::DeclarationMarkers;
pub use naming::normalize_constant_name;
pub use spec::{ConstantSpec, ConstantSpecInput, SpecItem};
