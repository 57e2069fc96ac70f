// ABOUTME: Ingredient amount scaling and per-ingredient manual adjustment engine
// ABOUTME: Computes displayed amounts, eighth-stepped nudges, and sanitized adjustment maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scaling & Adjustment Engine
//!
//! A recipe view has one global [`ScaleFactor`]. At 1x each ingredient may carry
//! a manual override stored in an [`IngredientAdjustments`] map; at 2x and 3x
//! overrides are ignored for display (but kept) and amounts are simply
//! `base × factor`, rounded to the nearest eighth when shown.
//!
//! Manual nudges move in eighths and never go below one eighth. Ingredients
//! without a base amount are never adjustable.

use std::collections::BTreeMap;

use heirloom_core::constants::amounts::{
    ADJUSTMENT_STEP, AMOUNT_EQUALITY_EPSILON, DISPLAY_STEP_DENOMINATOR, MIN_ADJUSTED_AMOUNT,
};
use heirloom_core::models::{ScaleFactor, SnapshotIngredient};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::trace;

use crate::fraction::format_decimal_to_fraction;

/// Direction of a manual nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NudgeDirection {
    /// Add one eighth
    Up,
    /// Remove one eighth, floored at one eighth
    Down,
}

impl NudgeDirection {
    /// Apply this nudge to an amount
    #[must_use]
    pub fn apply(self, current: f64) -> f64 {
        match self {
            Self::Up => increment_amount(current),
            Self::Down => decrement_amount(current),
        }
    }
}

/// Amount to show for one ingredient
///
/// Returns `None` when the ingredient has no base amount. At 1x a present
/// override wins; otherwise the result is `base × factor`. The result is a raw
/// decimal; see [`display_amount`] for the rendered string.
#[must_use]
pub fn compute_display_amount(
    base_amount: Option<f64>,
    scale: ScaleFactor,
    manual_override: Option<f64>,
) -> Option<f64> {
    let base = base_amount?;
    if scale.allows_manual_adjustment() {
        if let Some(amount) = manual_override {
            return Some(amount);
        }
    }
    Some(base * scale.multiplier())
}

/// Add one eighth. Unbounded above.
#[must_use]
pub fn increment_amount(current_amount: f64) -> f64 {
    current_amount + ADJUSTMENT_STEP
}

/// Remove one eighth, never going below one eighth
#[must_use]
pub fn decrement_amount(current_amount: f64) -> f64 {
    (current_amount - ADJUSTMENT_STEP).max(MIN_ADJUSTED_AMOUNT)
}

/// Round to the nearest eighth
///
/// Positive amounts never round down to zero; they stop at one eighth.
/// Non-finite input is returned unchanged.
#[must_use]
pub fn round_to_step(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = (value * DISPLAY_STEP_DENOMINATOR).round() / DISPLAY_STEP_DENOMINATOR;
    if value > 0.0 && rounded < MIN_ADJUSTED_AMOUNT {
        MIN_ADJUSTED_AMOUNT
    } else {
        rounded
    }
}

/// Rendered amount for one ingredient
///
/// Scaled amounts (2x, 3x) are rounded to the nearest eighth before
/// formatting; 1x amounts are shown as stored. Amountless ingredients render
/// as an empty string.
#[must_use]
pub fn display_amount(
    base_amount: Option<f64>,
    scale: ScaleFactor,
    manual_override: Option<f64>,
) -> String {
    let amount = compute_display_amount(base_amount, scale, manual_override).map(|amount| {
        if scale.allows_manual_adjustment() {
            amount
        } else {
            round_to_step(amount)
        }
    });
    format_decimal_to_fraction(amount)
}

/// Per-recipe map of ingredient key to manually overridden amount
///
/// Only finite numbers are ever held. Decoding from JSON silently drops
/// entries whose value is not a number, so malformed client payloads cannot
/// reach storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IngredientAdjustments(BTreeMap<String, f64>);

impl IngredientAdjustments {
    /// Empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an arbitrary JSON value, keeping only finite numeric entries
    ///
    /// Anything other than a JSON object yields an empty map.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::new();
        };
        object
            .iter()
            .filter_map(|(key, value)| value.as_f64().map(|amount| (key.clone(), amount)))
            .collect()
    }

    /// Stored override for an ingredient
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Whether an override exists for an ingredient
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no overrides
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate overrides in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, amount)| (key.as_str(), *amount))
    }

    /// Copy without the given key
    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.0.remove(key);
        next
    }

    /// Drop entries that are not finite numbers
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.0.retain(|_, amount| amount.is_finite());
        self
    }

    /// Drop entries whose key does not belong to an ingredient with a numeric base amount
    #[must_use]
    pub fn retain_numeric_ingredients(mut self, ingredients: &[SnapshotIngredient]) -> Self {
        self.0.retain(|key, _| {
            ingredients
                .iter()
                .any(|ingredient| ingredient.adjustment_key() == key && ingredient.amount.is_some())
        });
        self
    }
}

impl FromIterator<(String, f64)> for IngredientAdjustments {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect()).sanitized()
    }
}

impl<'de> Deserialize<'de> for IngredientAdjustments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// Set an override and return the sanitized map
///
/// A non-finite `new_amount` is dropped by sanitation, which also clears any
/// previous override for that key.
#[must_use]
pub fn apply_adjustment(
    adjustments: &IngredientAdjustments,
    ingredient_key: &str,
    new_amount: f64,
) -> IngredientAdjustments {
    let mut next = adjustments.clone();
    next.0.insert(ingredient_key.to_owned(), new_amount);
    trace!(ingredient_key, new_amount, "applied ingredient adjustment");
    next.sanitized()
}

/// Like [`apply_adjustment`], but an amount equal to the base removes the override
#[must_use]
pub fn apply_adjustment_against_base(
    adjustments: &IngredientAdjustments,
    ingredient_key: &str,
    new_amount: f64,
    base_amount: Option<f64>,
) -> IngredientAdjustments {
    let is_noop =
        base_amount.is_some_and(|base| (base - new_amount).abs() < AMOUNT_EQUALITY_EPSILON);
    if is_noop {
        adjustments.without(ingredient_key).sanitized()
    } else {
        apply_adjustment(adjustments, ingredient_key, new_amount)
    }
}
