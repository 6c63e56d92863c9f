//! Number formatting matching the ECMAScript `Number::toString` algorithm.

/// Format a float the way JSON text produced by a JavaScript engine does.
///
/// Shortest round-trip digits; integral values carry no fraction; `-0` is
/// `0`; magnitudes outside `[1e-6, 1e21)` switch to exponent form with an
/// explicit `+` on positive exponents. Non-finite values have no JSON
/// literal and become `null`.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&n.abs()) {
        return n.to_string();
    }

    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
#[path = "../tests/number_tests.rs"]
mod tests;
