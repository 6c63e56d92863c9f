//! Error taxonomy for value declaration, lookup, arithmetic and serialization.
//!
//! Every variant is a programming-contract violation surfaced synchronously to
//! the immediate caller. Saturation is never an error.

use thiserror::Error;

pub type ValueResult<T> = Result<T, ValueError>;

#[derive(Debug, Error)]
pub enum ValueError {
    /// A declared constant entry has an unrecognized shape.
    #[error("Illegal constant specification at position {index} of {type_name}.")]
    InvalidConstantSpec { type_name: String, index: usize },

    /// Lookup by name matched no declared constant.
    #[error("{type_name} has no constant {name}")]
    UnknownConstantName { type_name: String, name: String },

    /// Numeric lookup on a plain enum matched no declared code.
    #[error("{type_name} has no constant of number {value}")]
    UnknownConstantValue { type_name: String, value: u32 },

    #[error("Division by zero in {type_name}")]
    DivisionByZero { type_name: &'static str },

    #[error("Radix must be between 2 and 36, got {radix}")]
    InvalidRadix { radix: u32 },

    #[error("Cannot convert '{text}' to {type_name}")]
    InvalidIntegerLiteral {
        type_name: &'static str,
        text: String,
    },

    #[error("Value nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },

    #[error("Invalid JSON text: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod tests;
