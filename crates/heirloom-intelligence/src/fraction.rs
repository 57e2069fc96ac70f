// ABOUTME: Conversion between human-entered ingredient amounts and canonical decimals
// ABOUTME: Parses integers, decimals, fractions, mixed numbers, ranges and vulgar fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fraction/Decimal Converter
//!
//! Amounts arrive from forms, OCR and voice transcripts as free text
//! (`"1/2"`, `"2 1/3"`, `"1.5"`, `"1-2"`, `"2½"`) or as JSON numbers. They are
//! stored as `Option<f64>`, where `None` means the ingredient has no quantity
//! ("salt to taste"). Both directions are total: unparseable input degrades to
//! `None`, and formatting never fails.
//!
//! Ranges collapse to their lower bound: `"1-2"` parses as `1.0`.

use std::sync::LazyLock;

use heirloom_core::constants::amounts::{FRACTION_TOLERANCE, MAX_FRACTION_TERMS};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Raw amount as received in a payload: either a JSON number or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    /// Already numeric
    Number(f64),
    /// Free text to be parsed
    Text(String),
}

impl From<f64> for AmountValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

const NUMBER: &str = r"\d*\.?\d+";

// Patterns are static and known-valid; stored as Option so a compile failure degrades to "unparseable"
static PLAIN_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"^-?{NUMBER}$")).ok());

static MIXED_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(\d+)/(\d+)$").ok());

static SIMPLE_FRACTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").ok());

static RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"^({NUMBER})\s*-\s*({NUMBER})$")).ok());

/// Unicode vulgar fraction glyphs and their numerator/denominator
const VULGAR_FRACTIONS: &[(char, u64, u64)] = &[
    ('½', 1, 2),
    ('⅓', 1, 3),
    ('⅔', 2, 3),
    ('¼', 1, 4),
    ('¾', 3, 4),
    ('⅕', 1, 5),
    ('⅖', 2, 5),
    ('⅗', 3, 5),
    ('⅘', 4, 5),
    ('⅙', 1, 6),
    ('⅚', 5, 6),
    ('⅐', 1, 7),
    ('⅛', 1, 8),
    ('⅜', 3, 8),
    ('⅝', 5, 8),
    ('⅞', 7, 8),
    ('⅑', 1, 9),
    ('⅒', 1, 10),
];

/// Parse an optional raw amount into a canonical decimal
///
/// Numbers pass through unchanged; text is parsed with [`parse_amount_str`].
#[must_use]
pub fn parse_amount_to_decimal(input: Option<&AmountValue>) -> Option<f64> {
    match input? {
        AmountValue::Number(value) => Some(*value),
        AmountValue::Text(text) => parse_amount_str(text),
    }
}

/// Parse amount text into a canonical decimal
///
/// Accepts integers and decimals (`"2"`, `"1.5"`, `"-0.5"`), simple fractions
/// (`"3/4"`), mixed numbers (`"2 1/2"`), ranges (`"1-2"`, lower bound kept) and
/// Unicode vulgar fractions (`"½"`, `"2½"`). Anything else, including a zero
/// denominator, yields `None`.
///
/// # Examples
///
/// ```rust
/// use heirloom_intelligence::fraction::parse_amount_str;
///
/// assert_eq!(parse_amount_str("2 1/2"), Some(2.5));
/// assert_eq!(parse_amount_str("1-2"), Some(1.0));
/// assert_eq!(parse_amount_str("a pinch"), None);
/// ```
#[must_use]
pub fn parse_amount_str(input: &str) -> Option<f64> {
    let normalized = normalize_vulgar_fractions(input);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }

    if matches_pattern(&PLAIN_NUMBER, trimmed) {
        return trimmed.parse::<f64>().ok().filter(|value| value.is_finite());
    }

    if let Some(caps) = captures(&MIXED_NUMBER, trimmed) {
        let whole = caps.first()?.parse::<f64>().ok()?;
        let fraction = divide(caps.get(1)?, caps.get(2)?)?;
        return Some(whole + fraction);
    }

    if let Some(caps) = captures(&SIMPLE_FRACTION, trimmed) {
        return divide(caps.first()?, caps.get(1)?);
    }

    if let Some(caps) = captures(&RANGE, trimmed) {
        return caps.first()?.parse::<f64>().ok();
    }

    None
}

/// Format a canonical decimal as an integer, fraction or mixed number
///
/// `None` and non-finite values render as an empty string. Non-integers use
/// the best rational approximation within a relative tolerance of `1e-6`.
///
/// # Examples
///
/// ```rust
/// use heirloom_intelligence::fraction::format_decimal_to_fraction;
///
/// assert_eq!(format_decimal_to_fraction(Some(0.5)), "1/2");
/// assert_eq!(format_decimal_to_fraction(Some(2.5)), "2 1/2");
/// assert_eq!(format_decimal_to_fraction(Some(2.0)), "2");
/// assert_eq!(format_decimal_to_fraction(None), "");
/// ```
#[must_use]
pub fn format_decimal_to_fraction(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };
    if value.fract() == 0.0 {
        return format_whole(value);
    }

    let (numerator, denominator) = approximate_fraction(value.abs());
    let body = match split_mixed(numerator, denominator) {
        (whole, 0) => whole.to_string(),
        (0, remainder) => format!("{remainder}/{denominator}"),
        (whole, remainder) => format!("{whole} {remainder}/{denominator}"),
    };
    with_sign(value, body)
}

/// Format like [`format_decimal_to_fraction`] but with Unicode glyphs where one exists
///
/// `2.5` renders as `"2 ½"`; fractions without a glyph (such as `1/16`) fall
/// back to the ASCII form.
#[must_use]
pub fn format_decimal_to_vulgar(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };
    if value.fract() == 0.0 {
        return format_whole(value);
    }

    let (numerator, denominator) = approximate_fraction(value.abs());
    let (whole, remainder) = split_mixed(numerator, denominator);
    let Some(glyph) = vulgar_glyph(remainder, denominator) else {
        return format_decimal_to_fraction(Some(value));
    };
    let body = if whole == 0 {
        glyph.to_string()
    } else {
        format!("{whole} {glyph}")
    };
    with_sign(value, body)
}

/// Whole numbers print without a decimal point at any magnitude; `-0` prints as `0`
fn format_whole(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value:.0}")
}

/// Best rational approximation of a non-negative value by continued-fraction expansion
///
/// Returns `(numerator, denominator)` with the denominator at least 1.
#[must_use]
pub fn approximate_fraction(value: f64) -> (u64, u64) {
    let tolerance = FRACTION_TOLERANCE * value;
    let (mut h1, mut h2) = (1.0_f64, 0.0_f64);
    let (mut k1, mut k2) = (0.0_f64, 1.0_f64);
    let mut b = value;

    for _ in 0..MAX_FRACTION_TERMS {
        let a = b.floor();
        let h = a.mul_add(h1, h2);
        h2 = h1;
        h1 = h;
        let k = a.mul_add(k1, k2);
        k2 = k1;
        k1 = k;

        if (value - h1 / k1).abs() <= tolerance {
            break;
        }
        let remainder = b - a;
        if remainder == 0.0 {
            break;
        }
        b = 1.0 / remainder;
    }

    (h1 as u64, (k1 as u64).max(1))
}

fn split_mixed(numerator: u64, denominator: u64) -> (u64, u64) {
    (numerator / denominator, numerator % denominator)
}

fn with_sign(value: f64, body: String) -> String {
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

fn vulgar_glyph(numerator: u64, denominator: u64) -> Option<char> {
    VULGAR_FRACTIONS
        .iter()
        .find(|(_, n, d)| *n == numerator && *d == denominator)
        .map(|(glyph, _, _)| *glyph)
}

/// Rewrite vulgar fraction glyphs and the fraction slash as ASCII fractions
fn normalize_vulgar_fractions(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for ch in input.chars() {
        if ch == '\u{2044}' {
            out.push('/');
            continue;
        }
        match VULGAR_FRACTIONS.iter().find(|(glyph, _, _)| *glyph == ch) {
            Some((_, numerator, denominator)) => {
                if out.chars().last().is_some_and(|prev| prev.is_ascii_digit()) {
                    out.push(' ');
                }
                out.push_str(&format!("{numerator}/{denominator}"));
            }
            None => out.push(ch),
        }
    }
    out
}

fn matches_pattern(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// Capture groups 1.. of a full match, as string slices
fn captures<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Option<Vec<&'t str>> {
    let caps = pattern.as_ref()?.captures(text)?;
    Some(
        caps.iter()
            .skip(1)
            .map(|group| group.map_or("", |m| m.as_str()))
            .collect(),
    )
}

fn divide(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator = numerator.parse::<f64>().ok()?;
    let denominator = denominator.parse::<f64>().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}
