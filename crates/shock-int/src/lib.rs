//! Fixed-width integers with saturating arithmetic.
//!
//! Four widths are provided:
//!
//! | Type | Range |
//! |------|-------|
//! | [`Int32`] | `[-2^31, 2^31 - 1]` |
//! | [`UInt32`] | `[0, 2^32 - 1]` |
//! | [`Int64`] | `[-2^63, 2^63 - 1]` |
//! | [`UInt64`] | `[0, 2^64 - 1]` |
//!
//! Results are computed exactly and then clamped into range, so overflow
//! saturates instead of wrapping:
//!
//! ```
//! use shock_int::{Int32, UInt32};
//!
//! assert_eq!(Int32::new(i32::MAX).add(1).value(), i32::MAX);
//! assert_eq!(UInt32::new(0).subtract(1).value(), 0);
//! ```

mod bounded;
pub mod radix;
mod width;

pub use bounded::{Bounded, Int32, Int64, IntegerOperand, UInt32, UInt64};
pub use width::{I32, I64, U32, U64, Width};
