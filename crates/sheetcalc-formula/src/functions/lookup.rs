//! Lookup functions

use super::{resolve_scalar, FunctionOutcome};
use crate::error::{FormulaError, FormulaResult};
use crate::range::RangeBounds;
use sheetcalc_core::number::parse_int;
use sheetcalc_core::Snapshot;

/// VLOOKUP(lookup_value, range, col_offset)
///
/// Exact match only. Scans the first column of `range` from its start row
/// to its end row and returns the value `col_offset - 1` columns to the
/// right of the first matching cell, or an empty string when that cell is
/// absent. Only the start column and the two row numbers of `range` are
/// used. Matching ignores case.
pub fn fn_vlookup(args: &[&str], snapshot: &Snapshot) -> FormulaResult<FunctionOutcome> {
    let lookup_value = resolve_scalar(args.first().copied().unwrap_or_default(), snapshot)
        .to_uppercase();
    let range = args.get(1).copied().unwrap_or_default().trim();
    let offset_text = args.get(2).copied().unwrap_or_default();

    let Some(bounds) = RangeBounds::parse(range) else {
        return Ok(FunctionOutcome::NotAvailable);
    };

    let offset = parse_int(offset_text).ok_or_else(|| {
        FormulaError::argument(
            "VLOOKUP",
            format!("column offset is not a number: {:?}", offset_text.trim()),
        )
    })?;

    let first_column = RangeBounds {
        end_col: bounds.start_col,
        ..bounds
    };

    let matched = first_column
        .present_cells(snapshot)
        .into_iter()
        .find(|(_, value)| value.to_uppercase() == lookup_value);

    let Some(((col, row), _)) = matched else {
        return Ok(FunctionOutcome::NotAvailable);
    };

    let result = result_key(col, offset, row)
        .and_then(|key| snapshot.get(&key))
        .unwrap_or_default();
    Ok(FunctionOutcome::Value(result.to_string()))
}

/// Key of the cell `offset - 1` columns right of `col` on `row`
fn result_key(col: u32, offset: i64, row: i64) -> Option<String> {
    let code = i64::from(col).checked_add(offset)?.checked_sub(1)?;
    let code = u32::try_from(code).ok()?;
    let letter = char::from_u32(code)?;
    Some(format!("{}{}", letter, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fruit() -> Snapshot {
        [
            ("A1", "Apple"),
            ("B1", "5"),
            ("A2", "Pear"),
            ("B2", "3"),
            ("C2", "green"),
            ("A3", "Plum"),
        ]
        .into_iter()
        .collect()
    }

    fn lookup(args: &[&str], snapshot: &Snapshot) -> FunctionOutcome {
        fn_vlookup(args, snapshot).unwrap()
    }

    #[test]
    fn test_vlookup_exact_match() {
        let s = fruit();
        assert_eq!(
            lookup(&["\"APPLE\"", "A1:B3", "2"], &s),
            FunctionOutcome::Value("5".into())
        );
        assert_eq!(
            lookup(&["\"PEAR\"", "A1:C3", "3"], &s),
            FunctionOutcome::Value("green".into())
        );
        // Offset 1 returns the matched cell itself
        assert_eq!(
            lookup(&["\"PLUM\"", "A1:B3", "1"], &s),
            FunctionOutcome::Value("Plum".into())
        );
    }

    #[test]
    fn test_vlookup_missing_result_cell() {
        let s = fruit();
        assert_eq!(
            lookup(&["\"PLUM\"", "A1:B3", "2"], &s),
            FunctionOutcome::Value(String::new())
        );
        assert_eq!(
            lookup(&["\"APPLE\"", "A1:B3", "-70"], &s),
            FunctionOutcome::Value(String::new())
        );
        assert_eq!(
            lookup(&["\"APPLE\"", "A1:B3", "9223372036854775807"], &s),
            FunctionOutcome::Value(String::new())
        );
    }

    #[test]
    fn test_vlookup_not_found() {
        let s = fruit();
        assert_eq!(
            lookup(&["\"KIWI\"", "A1:B3", "2"], &s),
            FunctionOutcome::NotAvailable
        );
        // Rows outside the range are not searched
        assert_eq!(
            lookup(&["\"PLUM\"", "A1:B2", "2"], &s),
            FunctionOutcome::NotAvailable
        );
        // Only the start column is searched
        assert_eq!(
            lookup(&["5", "A1:B3", "1"], &s),
            FunctionOutcome::NotAvailable
        );
    }

    #[test]
    fn test_vlookup_range_without_colon() {
        let s = fruit();
        assert_eq!(
            lookup(&["\"APPLE\"", "A1", "2"], &s),
            FunctionOutcome::NotAvailable
        );
    }

    #[test]
    fn test_vlookup_cell_lookup_value() {
        let mut s = fruit();
        s.insert("D1", "pear");
        assert_eq!(
            lookup(&["D1", "A1:B3", "2"], &s),
            FunctionOutcome::Value("3".into())
        );
    }

    #[test]
    fn test_vlookup_non_ascii_match() {
        let s: Snapshot = [("A1", "café"), ("B1", "5")].into_iter().collect();
        // Formula text arrives uppercased
        assert_eq!(
            lookup(&["\"CAFÉ\"", "A1:B1", "2"], &s),
            FunctionOutcome::Value("5".into())
        );
        assert_eq!(
            lookup(&["A1", "A1:B1", "2"], &s),
            FunctionOutcome::Value("5".into())
        );
    }

    #[test]
    fn test_vlookup_bad_offset() {
        let s = fruit();
        assert!(fn_vlookup(&["\"APPLE\"", "A1:B3", "X"], &s).is_err());
        // Integer prefix is used
        assert_eq!(
            lookup(&["\"APPLE\"", "A1:B3", "2.9"], &s),
            FunctionOutcome::Value("5".into())
        );
    }
}
