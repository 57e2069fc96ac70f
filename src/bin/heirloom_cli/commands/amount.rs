// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Amount parse and format commands for heirloom-cli
// ABOUTME: Thin wrappers over the fraction converter

use anyhow::Result;
use heirloom::fraction::{format_decimal_to_fraction, format_decimal_to_vulgar, parse_amount_str};
use serde_json::json;

use crate::helpers::display::print_json;

/// Parse amount text and print the decimal (empty or `null` when unparseable)
pub fn parse(text: &str, as_json: bool) -> Result<()> {
    let value = parse_amount_str(text);
    if as_json {
        print_json(&json!({ "input": text, "value": value }))?;
    } else {
        println!("{}", value.map(|v| v.to_string()).unwrap_or_default());
    }
    Ok(())
}

/// Format a decimal as fraction text
pub fn format(value: f64, vulgar: bool, as_json: bool) -> Result<()> {
    let text = if vulgar {
        format_decimal_to_vulgar(Some(value))
    } else {
        format_decimal_to_fraction(Some(value))
    };
    if as_json {
        print_json(&json!({ "value": value, "text": text }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}
