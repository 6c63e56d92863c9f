//! Centralized limits and thresholds for the shock value crates.
//!
//! # Categories
//!
//! - **Declaration Counters**: Seeds for automatic constant numbering
//! - **Bit Widths**: Storage width of flags masks
//! - **Radix Bounds**: Accepted radices for integer text conversion
//! - **Serializer Limits**: Nesting depth and indentation caps

// =============================================================================
// Declaration Counters
// =============================================================================

/// Code given to the first undeclared constant of a plain enum.
///
/// Each following undeclared constant gets the previous resolved code plus one.
pub const ENUM_COUNTER_START: i64 = 0;

/// Mask given to the first undeclared constant of a flags enum.
///
/// Each following undeclared constant gets the previous resolved mask doubled,
/// so a run of undeclared constants occupies consecutive bits.
pub const FLAGS_COUNTER_START: i64 = 1;

// =============================================================================
// Bit Widths
// =============================================================================

/// Width of a flags mask in bits.
///
/// Declared values and numeric coercions are reduced modulo `2^FLAGS_BIT_WIDTH`.
pub const FLAGS_BIT_WIDTH: u32 = 32;

// =============================================================================
// Radix Bounds
// =============================================================================

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

// =============================================================================
// Serializer Limits
// =============================================================================

/// Maximum nesting depth of arrays and records the serializer will walk.
///
/// Value trees are acyclic by construction, so this only guards the call
/// stack against pathologically deep input (for example a parsed document).
pub const MAX_SERIALIZE_DEPTH: usize = 256;

/// Maximum indentation width per nesting level.
///
/// Wider indent requests are truncated, matching the native JSON formatter.
pub const MAX_INDENT_WIDTH: usize = 10;
