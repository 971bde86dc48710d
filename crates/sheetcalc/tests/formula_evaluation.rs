//! Tests for formula evaluation against cell snapshots

use pretty_assertions::assert_eq;
use sheetcalc::prelude::*;
use sheetcalc::{evaluate_formula, ERROR_SENTINEL, NOT_AVAILABLE_SENTINEL};

fn cells(pairs: &[(&str, &str)]) -> Snapshot {
    pairs.iter().copied().collect()
}

/// Text without a leading '=' is shown as typed
#[test]
fn test_literals_are_unchanged() {
    let s = cells(&[("A1", "1")]);
    for literal in ["", "hello", "42", "SUM(A1:A1)", " =A1", "#ERROR"] {
        assert_eq!(evaluate(literal, &s), literal);
    }
}

/// Test basic arithmetic
#[test]
fn test_evaluate_arithmetic() {
    let s = Snapshot::new();
    assert_eq!(evaluate("=5+3*2", &s), "11");
    assert_eq!(evaluate("=(1+2)*(3+4)", &s), "21");
    assert_eq!(evaluate("=-3+1", &s), "-2");
    assert_eq!(evaluate("=7/2", &s), "3.5");
    assert_eq!(evaluate("=1/3", &s), "0.3333333333333333");
    assert_eq!(evaluate("=1000000*1000000*1000000*1000", &s), "1e+21");
}

/// Test SUM with non-numeric values
#[test]
fn test_evaluate_sum() {
    let s = cells(&[("A1", "1"), ("A2", "2"), ("A3", "abc")]);
    assert_eq!(evaluate("=SUM(A1:A3)", &s), "3");
    assert_eq!(evaluate("=SUM(A1,A2)", &s), "3");
    assert_eq!(evaluate("=SUM(A1:A3)*100", &s), "3");
}

/// Test MIN/MAX discard non-numeric values
#[test]
fn test_evaluate_min_max() {
    let s = cells(&[("A1", "abc"), ("A2", "5")]);
    assert_eq!(evaluate("=MIN(A1:A2)", &s), "5");
    assert_eq!(evaluate("=MAX(A1:A2)", &s), "5");
    assert_eq!(evaluate("=MIN(B1:B5)", &s), "0");
}

/// Test AVERAGE and COUNT
#[test]
fn test_evaluate_average_count() {
    let s = cells(&[("A1", "2"), ("A2", "4"), ("A3", "x")]);
    assert_eq!(evaluate("=AVERAGE(A1:A2)", &s), "3");
    assert_eq!(evaluate("=AVG(A1:A3)", &s), "2");
    assert_eq!(evaluate("=COUNT(A1:A3)", &s), "3");
    assert_eq!(evaluate("=AVERAGE(C1:C3)", &s), "NaN");
}

/// Test IF function
#[test]
fn test_evaluate_if() {
    let s = cells(&[("A1", "10"), ("A2", "5")]);
    assert_eq!(evaluate("=IF(A1>A2,\"X\",\"Y\")", &s), "X");
    assert_eq!(evaluate("=IF(A1<A2,\"X\",\"Y\")", &s), "Y");
    assert_eq!(evaluate("=IF(A1=10,\"ten\",\"other\")", &s), "TEN");
    assert_eq!(evaluate("=IF(A1>=A2,\"X\",\"Y\")", &s), "Y");
    assert_eq!(evaluate("=IF(1>0,A1,A2)", &s), "A1");
}

/// Test VLOOKUP function
#[test]
fn test_evaluate_vlookup() {
    let s = cells(&[("A1", "Apple"), ("B1", "5"), ("A2", "Pear"), ("B2", "3")]);
    assert_eq!(evaluate("=VLOOKUP(\"Apple\",A1:B3,2)", &s), "5");
    assert_eq!(evaluate("=VLOOKUP(\"Pear\",A1:B3,2)", &s), "3");
    assert_eq!(evaluate("=VLOOKUP(\"Kiwi\",A1:B3,2)", &s), NOT_AVAILABLE_SENTINEL);
    assert_eq!(evaluate("=VLOOKUP(\"Pear\",A1:B3,3)", &s), "");
    assert_eq!(evaluate("=VLOOKUP(\"Pear\",A1,2)", &s), NOT_AVAILABLE_SENTINEL);
}

/// Test math functions
#[test]
fn test_evaluate_math() {
    let s = cells(&[("A1", "-2.5")]);
    assert_eq!(evaluate("=ROUND(3.14159,2)", &s), "3.14");
    assert_eq!(evaluate("=ROUND(2,2)", &s), "2.00");
    assert_eq!(evaluate("=ABS(A1)", &s), "2.5");
    assert_eq!(evaluate("=SQRT(16)", &s), "4");
    assert_eq!(evaluate("=POWER(2,8)", &s), "256");
    assert_eq!(evaluate("=MOD(-7,3)", &s), "-1");
    assert_eq!(evaluate("=CEILING(A1)", &s), "-2");
    assert_eq!(evaluate("=FLOOR(A1)", &s), "-3");
}

/// Calls a function declines fall through to the remaining stages
#[test]
fn test_declined_calls_fall_through() {
    let s = Snapshot::new();
    assert_eq!(evaluate("=SQRT(-4)", &s), "=SQRT(-4)");
    assert_eq!(evaluate("=ABS(x)", &s), "=ABS(x)");
    assert_eq!(evaluate("=MOD(1,0)", &s), "=MOD(1,0)");
    assert_eq!(evaluate("=IF(1,2,3)", &s), "=IF(1,2,3)");
}

/// Test error sentinels
#[test]
fn test_errors() {
    let s = Snapshot::new();
    assert_eq!(evaluate("=1/0", &s), ERROR_SENTINEL);
    assert_eq!(evaluate("=2*(3", &s), ERROR_SENTINEL);
    assert_eq!(evaluate("=ROUND(1,101)", &s), ERROR_SENTINEL);
    assert_eq!(evaluate("=VLOOKUP(A1,A1:B2,X)", &s), ERROR_SENTINEL);
    assert!(evaluate_formula("=1/0", &s).is_error());
}

/// Test single cell references
#[test]
fn test_cell_references() {
    assert_eq!(evaluate("=A1", &Snapshot::new()), "");
    assert_eq!(evaluate("=b2", &cells(&[("B2", "Mixed Case")])), "Mixed Case");
    assert_eq!(evaluate("=AB1", &cells(&[("AB1", "x")])), "=AB1");
}

/// Anything unrecognized is shown as typed, case preserved
#[test]
fn test_unrecognized() {
    let s = Snapshot::new();
    assert_eq!(evaluate("=", &s), "=");
    assert_eq!(evaluate("=hello", &s), "=hello");
    assert_eq!(evaluate("=A1&B1", &s), "=A1&B1");
    assert_eq!(
        evaluate_formula("=Concat(A1)", &s),
        Evaluation::Unrecognized("=Concat(A1)".into())
    );
}

/// Ranges larger than the snapshot are resolved from the snapshot
#[test]
fn test_large_ranges() {
    let s = cells(&[("A1", "1"), ("Z5000", "2"), ("M250", "x")]);
    assert_eq!(evaluate("=SUM(A1:Z100000)", &s), "3");
    assert_eq!(evaluate("=COUNT(A1:Z100000)", &s), "3");
    assert_eq!(evaluate("=VLOOKUP(\"X\",M1:N100000,1)", &s), "x");
}
