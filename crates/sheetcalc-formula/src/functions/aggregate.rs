//! Aggregate functions over a range or list operand
//!
//! SUM, AVERAGE and PRODUCT count non-numeric values as 0. MIN and MAX
//! drop them instead. COUNT counts non-blank values regardless of type.

use super::FunctionOutcome;
use crate::error::FormulaResult;
use crate::range::resolve_operands;
use sheetcalc_core::number::parse_float;
use sheetcalc_core::Snapshot;

/// Resolve the single operand of an aggregate, or `None` when it is empty
fn operand_values<'s>(args: &[&str], snapshot: &'s Snapshot) -> Option<Vec<&'s str>> {
    let operand = args.first().copied().unwrap_or_default();
    if operand.is_empty() {
        return None;
    }
    Some(resolve_operands(operand, snapshot))
}

fn coerced(value: &str) -> f64 {
    parse_float(value).unwrap_or(0.0)
}

/// SUM function
pub fn fn_sum(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let Some(values) = operand_values(args, snapshot) else {
        return Ok(FunctionOutcome::Declined);
    };

    let sum: f64 = values.iter().map(|v| coerced(v)).sum();
    Ok(FunctionOutcome::number(sum))
}

/// AVERAGE / AVG function
///
/// Divides by every resolved value, numeric or not. An empty operand
/// list yields `NaN`.
pub fn fn_average(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let Some(values) = operand_values(args, snapshot) else {
        return Ok(FunctionOutcome::Declined);
    };

    let sum: f64 = values.iter().map(|v| coerced(v)).sum();
    Ok(FunctionOutcome::number(sum / values.len() as f64))
}

/// COUNT function
pub fn fn_count(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let Some(values) = operand_values(args, snapshot) else {
        return Ok(FunctionOutcome::Declined);
    };

    let count = values.iter().filter(|v| !v.trim().is_empty()).count();
    Ok(FunctionOutcome::Value(count.to_string()))
}

fn numeric_values(values: &[&str]) -> Vec<f64> {
    values.iter().filter_map(|v| parse_float(v)).collect()
}

/// MIN function
pub fn fn_min(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let Some(values) = operand_values(args, snapshot) else {
        return Ok(FunctionOutcome::Declined);
    };

    let min = numeric_values(&values).into_iter().reduce(f64::min);
    Ok(FunctionOutcome::number(min.unwrap_or(0.0)))
}

/// MAX function
pub fn fn_max(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let Some(values) = operand_values(args, snapshot) else {
        return Ok(FunctionOutcome::Declined);
    };

    let max = numeric_values(&values).into_iter().reduce(f64::max);
    Ok(FunctionOutcome::number(max.unwrap_or(0.0)))
}

/// PRODUCT function
pub fn fn_product(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let Some(values) = operand_values(args, snapshot) else {
        return Ok(FunctionOutcome::Declined);
    };

    let product: f64 = values.iter().map(|v| coerced(v)).product();
    Ok(FunctionOutcome::number(product))
}
