//! Radix rendering and saturating text parsing.

use shock_common::limits::{MAX_RADIX, MIN_RADIX};
use shock_common::{ValueError, ValueResult};

fn check_radix(radix: u32) -> ValueResult<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ValueError::InvalidRadix { radix })
    }
}

/// Render `value` in `radix` with lowercase digits and a leading `-` for
/// negative values.
pub fn to_radix_string(value: i128, radix: u32) -> ValueResult<String> {
    check_radix(radix)?;

    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return Ok("0".to_string());
    }

    let mut digits = Vec::new();
    while magnitude > 0 {
        let digit = (magnitude % u128::from(radix)) as u32;
        digits.push(char::from_digit(digit, radix).unwrap_or('?'));
        magnitude /= u128::from(radix);
    }
    if value < 0 {
        digits.push('-');
    }
    Ok(digits.into_iter().rev().collect())
}

/// Parse an optionally signed digit string in `radix`.
///
/// Magnitudes beyond `i128` saturate; callers clamp further. Returns `None`
/// for empty input or any character that is not a digit of `radix`.
pub fn parse_radix(text: &str, radix: u32) -> ValueResult<Option<i128>> {
    check_radix(radix)?;

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    Ok(parse_digits(digits, radix).map(|m| if negative { -m } else { m }))
}

/// Parse an integer literal: decimal with an optional sign, or an unsigned
/// `0x`/`0o`/`0b` prefixed literal. Surrounding whitespace is ignored.
pub fn parse_literal(text: &str) -> Option<i128> {
    let text = text.trim();
    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixed {
        if let Some(digits) = text.strip_prefix(prefix) {
            return parse_digits(digits, radix);
        }
    }
    parse_radix(text, 10).ok().flatten()
}

fn parse_digits(digits: &str, radix: u32) -> Option<i128> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0i128, |acc, c| {
        let digit = c.to_digit(radix)?;
        Some(
            acc.saturating_mul(i128::from(radix))
                .saturating_add(i128::from(digit)),
        )
    })
}

#[cfg(test)]
#[path = "../tests/radix_tests.rs"]
mod tests;
