//! Number-to-display formatting

use crate::error::{FormulaError, FormulaResult};
use rust_decimal::prelude::*;

/// Largest digit count accepted by [`to_fixed`]
pub const MAX_FIXED_DIGITS: i64 = 100;

/// Format a number for display
///
/// Integral values print without a fraction, `-0` prints as `0`, magnitudes
/// of at least 1e21 or below 1e-6 use exponent notation (`1e+21`, `1.5e-7`),
/// and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
///
/// ```
/// use sheetcalc_formula::format::format_number;
///
/// assert_eq!(format_number(11.0), "11");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", n);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }

    format!("{}", n)
}

/// Format a number with exactly `digits` fractional digits
///
/// Midpoints round away from zero. `digits` must be within `0..=100`.
/// Magnitudes of at least 1e21 and non-finite values use [`format_number`].
pub fn to_fixed(value: f64, digits: i64) -> FormulaResult<String> {
    if !(0..=MAX_FIXED_DIGITS).contains(&digits) {
        return Err(FormulaError::argument(
            "ROUND",
            format!("digits must be between 0 and {}, got {}", MAX_FIXED_DIGITS, digits),
        ));
    }

    if !value.is_finite() || value.abs() >= 1e21 {
        return Ok(format_number(value));
    }

    let digits = digits as u32;
    let fixed = fixed_decimal(value, digits)
        .unwrap_or_else(|| format!("{:.*}", digits as usize, value.abs()));

    if value < 0.0 {
        Ok(format!("-{}", fixed))
    } else {
        Ok(fixed)
    }
}

/// Exact decimal rendering of `|value|`, when `Decimal` can hold the requested scale
fn fixed_decimal(value: f64, digits: u32) -> Option<String> {
    let dec = Decimal::from_f64_retain(value)?;
    let mut rounded = dec.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits);
    (rounded.scale() == digits).then(|| rounded.abs().to_string())
}
