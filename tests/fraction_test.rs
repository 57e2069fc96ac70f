// ABOUTME: Integration tests for the amount parser and fraction formatter
// ABOUTME: Covers accepted input forms, degraded input and eighth-step round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use heirloom::fraction::{
    format_decimal_to_fraction, format_decimal_to_vulgar, parse_amount_str,
    parse_amount_to_decimal, AmountValue,
};

fn assert_close(actual: Option<f64>, expected: f64) {
    let value = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
    assert!(
        (value - expected).abs() < 1e-9,
        "expected {expected}, got {value}"
    );
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_accepted_forms() {
    assert_close(parse_amount_str("2"), 2.0);
    assert_close(parse_amount_str("1.5"), 1.5);
    assert_close(parse_amount_str(".25"), 0.25);
    assert_close(parse_amount_str("3/4"), 0.75);
    assert_close(parse_amount_str("1 1/2"), 1.5);
    assert_close(parse_amount_str("  2 1/3  "), 2.0 + 1.0 / 3.0);
    assert_close(parse_amount_str("1-2"), 1.0);
    assert_close(parse_amount_str("1.5 - 2"), 1.5);
}

#[test]
fn test_parse_vulgar_glyphs() {
    assert_close(parse_amount_str("½"), 0.5);
    assert_close(parse_amount_str("2½"), 2.5);
    assert_close(parse_amount_str("1 ¾"), 1.75);
    assert_close(parse_amount_str("3\u{2044}4"), 0.75);
}

#[test]
fn test_parse_degrades_to_none() {
    for input in ["", "   ", "a pinch", "to taste", "1/0", "1 1/0", "abc/2", "1/2/3"] {
        assert_eq!(parse_amount_str(input), None, "input {input:?}");
    }
}

#[test]
fn test_numbers_pass_through() {
    assert_eq!(parse_amount_to_decimal(None), None);
    assert_eq!(
        parse_amount_to_decimal(Some(&AmountValue::from(0.3))),
        Some(0.3)
    );
    assert_close(parse_amount_to_decimal(Some(&AmountValue::from("3/8"))), 0.375);
}

#[test]
fn test_amount_value_deserializes_numbers_and_text() {
    let values: Vec<AmountValue> = serde_json::from_str(r#"[1.25, "1 1/4"]"#).unwrap();
    let parsed: Vec<Option<f64>> = values
        .iter()
        .map(|value| parse_amount_to_decimal(Some(value)))
        .collect();
    assert_eq!(parsed, vec![Some(1.25), Some(1.25)]);
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_format_table() {
    let cases = [
        (0.5, "1/2"),
        (0.25, "1/4"),
        (0.125, "1/8"),
        (1.0 / 3.0, "1/3"),
        (2.0 / 3.0, "2/3"),
        (1.5, "1 1/2"),
        (2.75, "2 3/4"),
        (3.0, "3"),
        (0.0, "0"),
    ];
    for (value, expected) in cases {
        assert_eq!(format_decimal_to_fraction(Some(value)), expected, "value {value}");
    }
}

#[test]
fn test_format_absent_and_non_finite() {
    assert_eq!(format_decimal_to_fraction(None), "");
    assert_eq!(format_decimal_to_fraction(Some(f64::NAN)), "");
    assert_eq!(format_decimal_to_fraction(Some(f64::INFINITY)), "");
}

#[test]
fn test_format_negative() {
    assert_eq!(format_decimal_to_fraction(Some(-0.5)), "-1/2");
    assert_eq!(format_decimal_to_fraction(Some(-1.25)), "-1 1/4");
}

#[test]
fn test_large_whole_amounts_keep_every_digit() {
    let parsed = parse_amount_str("100000000000000000000");
    assert_eq!(format_decimal_to_fraction(parsed), "100000000000000000000");
    assert_eq!(format_decimal_to_vulgar(parsed), "100000000000000000000");
}

#[test]
fn test_vulgar_formatting() {
    assert_eq!(format_decimal_to_vulgar(Some(0.5)), "½");
    assert_eq!(format_decimal_to_vulgar(Some(2.75)), "2 ¾");
    assert_eq!(format_decimal_to_vulgar(Some(0.0625)), "1/16");
    assert_eq!(format_decimal_to_vulgar(Some(4.0)), "4");
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_eighths_round_trip() {
    for step in 1..=800_u32 {
        let value = f64::from(step) / 8.0;
        let text = format_decimal_to_fraction(Some(value));
        let parsed = parse_amount_str(&text);
        assert_eq!(parsed, Some(value), "value {value} formatted as {text:?}");
    }
}

#[test]
fn test_format_is_idempotent_through_parse() {
    for value in [0.1, 0.2, 1.0 / 3.0, 1.0 / 7.0, 2.6, 5.0 / 6.0] {
        let once = format_decimal_to_fraction(Some(value));
        let twice = format_decimal_to_fraction(parse_amount_str(&once));
        assert_eq!(once, twice, "value {value}");
    }
}

#[test]
fn test_vulgar_output_parses_back() {
    for value in [0.5, 0.25, 1.75, 2.0 / 3.0, 3.125] {
        let text = format_decimal_to_vulgar(Some(value));
        let parsed = parse_amount_str(&text).unwrap();
        assert!((parsed - value).abs() < 1e-6, "value {value} as {text:?}");
    }
}
