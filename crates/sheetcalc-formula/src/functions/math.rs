//! Math functions
//!
//! Every argument is a scalar. An argument that does not read as a number
//! declines the call.

use super::{resolve_scalar, scalar_number, FunctionOutcome};
use crate::error::FormulaResult;
use crate::format::to_fixed;
use sheetcalc_core::number::parse_int;
use sheetcalc_core::Snapshot;

fn arg<'a>(args: &[&'a str], index: usize) -> &'a str {
    args.get(index).copied().unwrap_or_default()
}

/// Apply a one-argument numeric function
fn unary(args: &[&str], snapshot: &Snapshot, f: fn(f64) -> f64) -> FunctionOutcome {
    match scalar_number(arg(args, 0), snapshot) {
        Some(value) => FunctionOutcome::number(f(value)),
        None => FunctionOutcome::Declined,
    }
}

/// ROUND function
///
/// Returns the value with exactly `decimals` fractional digits, so
/// `ROUND(2,2)` shows `2.00`.
pub fn fn_round(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let value = scalar_number(arg(args, 0), snapshot);
    let decimals = parse_int(resolve_scalar(arg(args, 1), snapshot));

    match (value, decimals) {
        (Some(value), Some(decimals)) => Ok(FunctionOutcome::Value(to_fixed(value, decimals)?)),
        _ => Ok(FunctionOutcome::Declined),
    }
}

/// ABS function
pub fn fn_abs(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    Ok(unary(args, snapshot, f64::abs))
}

/// SQRT function
///
/// Negative input declines rather than producing `NaN`.
pub fn fn_sqrt(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    match scalar_number(arg(args, 0), snapshot) {
        Some(value) if value >= 0.0 => Ok(FunctionOutcome::number(value.sqrt())),
        _ => Ok(FunctionOutcome::Declined),
    }
}

/// POWER function
pub fn fn_power(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let base = scalar_number(arg(args, 0), snapshot);
    let exponent = scalar_number(arg(args, 1), snapshot);

    match (base, exponent) {
        (Some(base), Some(exponent)) => Ok(FunctionOutcome::number(power(base, exponent))),
        _ => Ok(FunctionOutcome::Declined),
    }
}

/// `powf` except that a base of magnitude 1 raised to an infinite power is `NaN`
fn power(base: f64, exponent: f64) -> f64 {
    if base.abs() == 1.0 && exponent.is_infinite() {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

/// MOD function
///
/// Truncated remainder: the result takes the sign of the dividend. A zero
/// divisor declines.
pub fn fn_mod(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let dividend = scalar_number(arg(args, 0), snapshot);
    let divisor = scalar_number(arg(args, 1), snapshot);

    match (dividend, divisor) {
        (Some(dividend), Some(divisor)) if divisor != 0.0 => {
            Ok(FunctionOutcome::number(dividend % divisor))
        }
        _ => Ok(FunctionOutcome::Declined),
    }
}

/// CEILING function
pub fn fn_ceiling(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    Ok(unary(args, snapshot, f64::ceil))
}

/// FLOOR function
pub fn fn_floor(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    Ok(unary(args, snapshot, f64::floor))
}
