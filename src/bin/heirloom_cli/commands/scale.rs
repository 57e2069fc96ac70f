// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Scaling and nudge commands for heirloom-cli
// ABOUTME: Shows displayed amounts at a scale factor and steps amounts by eighths

use anyhow::{anyhow, Result};
use heirloom::fraction::{format_decimal_to_fraction, parse_amount_str};
use heirloom::models::ScaleFactor;
use heirloom::scaling::{compute_display_amount, display_amount, NudgeDirection};
use serde_json::json;

use crate::helpers::display::print_json;

fn parse_required(text: &str) -> Result<f64> {
    parse_amount_str(text).ok_or_else(|| anyhow!("'{text}' is not a recognisable amount"))
}

/// Print the amount shown for an ingredient at the given scale
pub fn scale(base: &str, factor: u8, manual_override: Option<&str>, as_json: bool) -> Result<()> {
    let scale = ScaleFactor::try_from(factor)?;
    let base_amount = parse_amount_str(base);
    let manual = manual_override.map(parse_required).transpose()?;

    let value = compute_display_amount(base_amount, scale, manual);
    let text = display_amount(base_amount, scale, manual);
    if as_json {
        print_json(&json!({
            "base": base_amount,
            "scale": scale.to_string(),
            "override": manual,
            "value": value,
            "text": text,
        }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}

/// Step an amount repeatedly and print each intermediate value
pub fn nudge(amount: &str, direction: NudgeDirection, times: u32, as_json: bool) -> Result<()> {
    let start = parse_required(amount)?;
    let steps: Vec<f64> = (0..times)
        .scan(start, |current, _| {
            *current = direction.apply(*current);
            Some(*current)
        })
        .collect();

    if as_json {
        let texts: Vec<String> = steps
            .iter()
            .map(|step| format_decimal_to_fraction(Some(*step)))
            .collect();
        print_json(&json!({ "start": start, "steps": steps, "texts": texts }))?;
    } else {
        for step in &steps {
            println!("{}", format_decimal_to_fraction(Some(*step)));
        }
    }
    Ok(())
}
