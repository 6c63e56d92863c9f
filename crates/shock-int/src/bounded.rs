//! Bounded integers with saturating arithmetic.
//!
//! A [`Bounded<W>`] always holds a value inside `[W::MIN, W::MAX]`. Inputs
//! and results outside that range are clamped to the nearest bound; this is
//! never an error and never wraps. Every operation returns a new value.
//!
//! Operands go through the same coercion as construction: any primitive
//! integer or any bounded integer (of any width) is accepted and clamped into
//! this width first.

use crate::radix;
use crate::width::{I32, I64, U32, U64, Width};
use serde::{Serialize, Serializer};
use shock_common::{ValueError, ValueResult};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use tracing::trace;

/// An integer clamped to the range of its width `W`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bounded<W: Width> {
    raw: i128,
    _width: PhantomData<W>,
}

pub type Int32 = Bounded<I32>;
pub type UInt32 = Bounded<U32>;
pub type Int64 = Bounded<I64>;
pub type UInt64 = Bounded<U64>;

/// A value usable as a bounded-integer operand.
pub trait IntegerOperand {
    /// The operand's exact value, widened to `i128` (saturating for `u128`).
    fn to_raw(&self) -> i128;
}

macro_rules! operand_impl {
    ($($t:ty),*) => {
        $(
            impl IntegerOperand for $t {
                #[inline]
                fn to_raw(&self) -> i128 {
                    i128::from(*self)
                }
            }

            impl<W: Width> From<$t> for Bounded<W> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

operand_impl!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl IntegerOperand for u128 {
    fn to_raw(&self) -> i128 {
        i128::try_from(*self).unwrap_or(i128::MAX)
    }
}

impl IntegerOperand for isize {
    fn to_raw(&self) -> i128 {
        *self as i128
    }
}

impl IntegerOperand for usize {
    fn to_raw(&self) -> i128 {
        *self as i128
    }
}

impl<V: Width> IntegerOperand for Bounded<V> {
    fn to_raw(&self) -> i128 {
        self.raw
    }
}

impl<T: IntegerOperand + ?Sized> IntegerOperand for &T {
    fn to_raw(&self) -> i128 {
        (**self).to_raw()
    }
}

impl<W: Width> Bounded<W> {
    pub const MIN_VALUE: Self = Self::from_clamped(W::MIN);
    pub const MAX_VALUE: Self = Self::from_clamped(W::MAX);

    const fn from_clamped(raw: i128) -> Self {
        Self {
            raw,
            _width: PhantomData,
        }
    }

    fn saturate(raw: i128) -> Self {
        Self::from_clamped(raw.clamp(W::MIN, W::MAX))
    }

    /// Construct from any integer operand, saturating into range.
    pub fn new(value: impl IntegerOperand) -> Self {
        Self::saturate(value.to_raw())
    }

    /// Parse digits in `radix` (2..=36) with an optional sign, saturating
    /// out-of-range magnitudes.
    pub fn from_str_radix(text: &str, radix: u32) -> ValueResult<Self> {
        radix::parse_radix(text, radix)?
            .map(Self::saturate)
            .ok_or_else(|| Self::invalid_literal(text))
    }

    fn invalid_literal(text: &str) -> ValueError {
        ValueError::InvalidIntegerLiteral {
            type_name: W::NAME,
            text: text.to_string(),
        }
    }

    /// The native value.
    pub fn value(self) -> W::Native {
        W::to_native(self.raw)
    }

    /// The value widened to `i128`.
    pub fn to_i128(self) -> i128 {
        self.raw
    }

    pub fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Value equality after coercing `other` into this width.
    pub fn equals(self, other: impl IntegerOperand) -> bool {
        self.raw == Self::new(other).raw
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: impl IntegerOperand) -> Self {
        Self::saturate(self.raw.saturating_add(Self::new(other).raw))
    }

    pub fn subtract(self, other: impl IntegerOperand) -> Self {
        Self::saturate(self.raw.saturating_sub(Self::new(other).raw))
    }

    pub fn multiply(self, other: impl IntegerOperand) -> Self {
        Self::saturate(self.raw.saturating_mul(Self::new(other).raw))
    }

    /// Division truncating toward zero.
    pub fn divide(self, other: impl IntegerOperand) -> ValueResult<Self> {
        let divisor = self.nonzero_divisor(other)?;
        Ok(Self::saturate(self.raw / divisor))
    }

    /// Remainder of truncating division; takes the sign of `self`.
    pub fn remainder(self, other: impl IntegerOperand) -> ValueResult<Self> {
        let divisor = self.nonzero_divisor(other)?;
        Ok(Self::saturate(self.raw % divisor))
    }

    fn nonzero_divisor(self, other: impl IntegerOperand) -> ValueResult<i128> {
        let divisor = Self::new(other).raw;
        if divisor == 0 {
            trace!(type_name = W::NAME, dividend = self.raw, "division by zero");
            return Err(ValueError::DivisionByZero { type_name: W::NAME });
        }
        Ok(divisor)
    }

    /// Raise to `exponent` (coerced into this width), saturating.
    ///
    /// Negative exponents truncate like integer division: `1` for a base of
    /// 1, `±1` for a base of -1, `0` for any other nonzero base, and
    /// [`ValueError::DivisionByZero`] for a base of 0.
    pub fn pow(self, exponent: impl IntegerOperand) -> ValueResult<Self> {
        let exponent = Self::new(exponent).raw;
        let base = self.raw;

        if exponent < 0 {
            return match base {
                0 => Err(ValueError::DivisionByZero { type_name: W::NAME }),
                1 => Ok(Self::saturate(1)),
                -1 => Ok(Self::saturate(if exponent % 2 == 0 { 1 } else { -1 })),
                _ => Ok(Self::saturate(0)),
            };
        }

        Ok(Self::saturate(saturating_pow(base, exponent.unsigned_abs())))
    }

    /// Render in `radix` (2..=36), lowercase digits, leading `-` when negative.
    pub fn to_string_radix(self, radix: u32) -> ValueResult<String> {
        radix::to_radix_string(self.raw, radix)
    }
}

fn saturating_pow(base: i128, exponent: u128) -> i128 {
    match u32::try_from(exponent) {
        Ok(exp) => base.saturating_pow(exp),
        Err(_) => match base {
            0 | 1 => base,
            -1 => {
                if exponent % 2 == 0 {
                    1
                } else {
                    -1
                }
            }
            _ if base < 0 && exponent % 2 == 1 => i128::MIN,
            _ => i128::MAX,
        },
    }
}

impl<W: Width> Default for Bounded<W> {
    fn default() -> Self {
        Self::from_clamped(0)
    }
}

impl<W: Width> fmt::Display for Bounded<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl<W: Width> fmt::Debug for Bounded<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", W::NAME, self.raw)
    }
}

impl<W: Width> FromStr for Bounded<W> {
    type Err = ValueError;

    /// Accepts decimal with an optional sign and `0x`/`0o`/`0b` prefixed
    /// literals; surrounding whitespace is ignored.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        radix::parse_literal(text)
            .map(Self::saturate)
            .ok_or_else(|| Self::invalid_literal(text))
    }
}

impl<W: Width> Serialize for Bounded<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if W::SIGNED {
            serializer.serialize_i64(self.raw as i64)
        } else {
            serializer.serialize_u64(self.raw as u64)
        }
    }
}

impl<W: Width, R: IntegerOperand> Add<R> for Bounded<W> {
    type Output = Self;

    fn add(self, rhs: R) -> Self {
        Bounded::add(self, rhs)
    }
}

impl<W: Width, R: IntegerOperand> Sub<R> for Bounded<W> {
    type Output = Self;

    fn sub(self, rhs: R) -> Self {
        self.subtract(rhs)
    }
}

impl<W: Width, R: IntegerOperand> Mul<R> for Bounded<W> {
    type Output = Self;

    fn mul(self, rhs: R) -> Self {
        self.multiply(rhs)
    }
}

impl<W: Width> Neg for Bounded<W> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::saturate(-self.raw)
    }
}

#[cfg(test)]
#[path = "../tests/bounded_tests.rs"]
mod tests;
