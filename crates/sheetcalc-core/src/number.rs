//! Lenient numeric parsing of display values
//!
//! Display values are free text. A value counts as numeric when it *starts*
//! with a number: `"12abc"` reads as 12, `"  3.5"` as 3.5, `"abc"` as nothing.

use lazy_regex::regex;

/// Parse the leading decimal number of a string, skipping leading whitespace
///
/// Accepts an optional sign, digits with an optional fraction (or a bare
/// fraction like `.5`), an optional exponent, and the word `Infinity`.
///
/// ```
/// use sheetcalc_core::number::parse_float;
///
/// assert_eq!(parse_float("12abc"), Some(12.0));
/// assert_eq!(parse_float(" -.5e1"), Some(-5.0));
/// assert_eq!(parse_float("abc"), None);
/// ```
pub fn parse_float(text: &str) -> Option<f64> {
    let re = regex!(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)");
    let m = re.find(text.trim_start())?;
    let s = m.as_str();

    match s.trim_start_matches(['+', '-']) {
        "Infinity" if s.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => s.parse().ok(),
    }
}

/// Parse the leading integer of a string, skipping leading whitespace
///
/// A fractional part is ignored: `"2.7"` reads as 2.
pub fn parse_int(text: &str) -> Option<i64> {
    let m = regex!(r"^[+-]?[0-9]+").find(text.trim_start())?;
    m.as_str().parse().ok()
}
