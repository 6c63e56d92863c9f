//! Width markers for [`Bounded`](crate::Bounded).
//!
//! Each marker fixes the representable range `[MIN, MAX]` and the native
//! integer type values are reported in. Bounds are expressed in `i128`, the
//! domain every computation happens in before clamping.

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Range and native representation of a bounded integer.
pub trait Width:
    sealed::Sealed + Copy + Clone + fmt::Debug + PartialEq + Eq + Hash + PartialOrd + Ord + 'static
{
    type Native: Copy + fmt::Debug + fmt::Display + Into<i128>;

    /// Type name used in diagnostics.
    const NAME: &'static str;
    const SIGNED: bool;
    const MIN: i128;
    const MAX: i128;

    /// Convert an already clamped value to the native type.
    fn to_native(raw: i128) -> Self::Native;
}

macro_rules! width_marker {
    ($(#[$doc:meta])* $marker:ident, $native:ty, $name:literal, $signed:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $marker;

        impl sealed::Sealed for $marker {}

        impl Width for $marker {
            type Native = $native;

            const NAME: &'static str = $name;
            const SIGNED: bool = $signed;
            const MIN: i128 = <$native>::MIN as i128;
            const MAX: i128 = <$native>::MAX as i128;

            #[inline]
            fn to_native(raw: i128) -> $native {
                debug_assert!((Self::MIN..=Self::MAX).contains(&raw));
                raw as $native
            }
        }
    };
}

width_marker!(
    /// 32-bit signed: `[-2^31, 2^31 - 1]`.
    I32, i32, "Int32", true
);
width_marker!(
    /// 32-bit unsigned: `[0, 2^32 - 1]`.
    U32, u32, "UInt32", false
);
width_marker!(
    /// 64-bit signed: `[-2^63, 2^63 - 1]`.
    I64, i64, "Int64", true
);
width_marker!(
    /// 64-bit unsigned: `[0, 2^64 - 1]`.
    ///
    /// This is the full unsigned range. Earlier revisions of the unsigned
    /// 64-bit type clamped at `2^63 - 1`; values in `[2^63, 2^64 - 1]` that
    /// used to saturate are now representable.
    U64, u64, "UInt64", false
);
