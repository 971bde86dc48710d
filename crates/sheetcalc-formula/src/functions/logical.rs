//! Logical functions

use super::{resolve_scalar, strip_quotes, FunctionOutcome};
use crate::error::FormulaResult;
use sheetcalc_core::number::parse_float;
use sheetcalc_core::Snapshot;

/// Comparison operators understood in an IF condition, in the order they
/// are searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Greater,
    Less,
    Equal,
}

impl Comparison {
    const SEARCH_ORDER: [(char, Comparison); 3] = [
        ('>', Comparison::Greater),
        ('<', Comparison::Less),
        ('=', Comparison::Equal),
    ];

    /// First operator (by search order, not position) the condition contains
    fn find(condition: &str) -> Option<(char, Comparison)> {
        Self::SEARCH_ORDER
            .into_iter()
            .find(|(symbol, _)| condition.contains(*symbol))
    }
}

/// IF function
///
/// The condition is split on its operator and only the first two pieces
/// are compared, so `A1>=A2` compares `A1` against `=A2`. `>` and `<`
/// compare numerically and are false when either side is not a number.
/// `=` compares text case-insensitively. The chosen branch is returned as
/// written, minus surrounding quotes.
pub fn fn_if(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let condition = args.first().copied().unwrap_or_default().trim();
    let if_true = args.get(1).copied().unwrap_or_default();
    let if_false = args.get(2).copied().unwrap_or_default();

    let Some((symbol, comparison)) = Comparison::find(condition) else {
        return Ok(FunctionOutcome::Declined);
    };

    let mut sides = condition.split(symbol);
    let left = resolve_scalar(sides.next().unwrap_or_default(), snapshot);
    let right = resolve_scalar(sides.next().unwrap_or_default(), snapshot);

    let holds = match comparison {
        Comparison::Greater => compare_numbers(left, right, |l, r| l > r),
        Comparison::Less => compare_numbers(left, right, |l, r| l < r),
        Comparison::Equal => left.to_uppercase() == right.to_uppercase(),
    };

    let branch = if holds { if_true } else { if_false };
    Ok(FunctionOutcome::Value(strip_quotes(branch.trim()).to_string()))
}

fn compare_numbers(left: &str, right: &str, op: fn(f64, f64) -> bool) -> bool {
    match (parse_float(left), parse_float(right)) {
        (Some(l), Some(r)) => op(l, r),
        _ => false,
    }
}
