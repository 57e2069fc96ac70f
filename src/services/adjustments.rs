// ABOUTME: Ingredient adjustment service for scaled recipe views and manual nudges
// ABOUTME: Validates overrides, persists sanitized maps and builds display rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use heirloom_core::errors::{AppError, AppResult};
use heirloom_core::models::{ScaleFactor, SnapshotIngredient};
use heirloom_intelligence::scaling::{
    apply_adjustment_against_base, compute_display_amount, display_amount,
    IngredientAdjustments, NudgeDirection,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::storage::AdjustmentRepository;

/// One ingredient row as shown in a scaled recipe view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientView {
    /// Adjustment key (ingredient id, else name)
    pub key: String,
    /// Ingredient name
    pub name: String,
    /// Unit as entered
    pub unit: Option<String>,
    /// Stored base amount
    pub base_amount: Option<f64>,
    /// Amount after scaling or override
    pub display_amount: Option<f64>,
    /// Rendered fraction text (empty for amountless ingredients)
    pub display_text: String,
    /// Whether a manual override is currently in effect
    pub adjusted: bool,
    /// Whether the nudge controls should be offered
    pub adjustable: bool,
}

/// Manual ingredient adjustment operations
#[derive(Clone)]
pub struct AdjustmentService {
    repository: Arc<dyn AdjustmentRepository>,
}

impl AdjustmentService {
    /// Create a service over the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn AdjustmentRepository>) -> Self {
        Self { repository }
    }

    /// Stored overrides for a recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn adjustments(&self, recipe_id: Uuid) -> AppResult<IngredientAdjustments> {
        self.repository.load_adjustments(recipe_id).await
    }

    /// Display rows for every ingredient at the given scale
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn view(
        &self,
        recipe_id: Uuid,
        ingredients: &[SnapshotIngredient],
        scale: ScaleFactor,
    ) -> AppResult<Vec<IngredientView>> {
        let adjustments = self.repository.load_adjustments(recipe_id).await?;
        let rows = ingredients
            .iter()
            .map(|ingredient| {
                let key = ingredient.adjustment_key();
                let manual = adjustments.get(key);
                let adjustable = ingredient.amount.is_some() && scale.allows_manual_adjustment();
                IngredientView {
                    key: key.to_owned(),
                    name: ingredient.name.clone(),
                    unit: ingredient.unit.clone(),
                    base_amount: ingredient.amount,
                    display_amount: compute_display_amount(ingredient.amount, scale, manual),
                    display_text: display_amount(ingredient.amount, scale, manual),
                    adjusted: adjustable && manual.is_some(),
                    adjustable,
                }
            })
            .collect();
        Ok(rows)
    }

    /// Step an ingredient's effective amount by one eighth and persist it
    ///
    /// Returns the new effective amount. Landing back on the base amount
    /// clears the override.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for ingredients without a base amount
    pub async fn nudge(
        &self,
        recipe_id: Uuid,
        ingredient_key: &str,
        base_amount: Option<f64>,
        direction: NudgeDirection,
    ) -> AppResult<f64> {
        let base = require_base(ingredient_key, base_amount)?;
        let stored = self.repository.load_adjustments(recipe_id).await?;
        let current = stored.get(ingredient_key).unwrap_or(base);
        let next = direction.apply(current);
        let updated = apply_adjustment_against_base(&stored, ingredient_key, next, Some(base));
        self.repository.save_adjustments(recipe_id, &updated).await?;
        debug!(%recipe_id, ingredient_key, ?direction, amount = next, "nudged ingredient");
        Ok(next)
    }

    /// Set an explicit override amount
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for amountless ingredients and for
    /// amounts that are negative or not finite
    pub async fn set_override(
        &self,
        recipe_id: Uuid,
        ingredient_key: &str,
        base_amount: Option<f64>,
        amount: f64,
    ) -> AppResult<IngredientAdjustments> {
        let base = require_base(ingredient_key, base_amount)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Adjusted amount for '{ingredient_key}' must be a non-negative number"
            )));
        }
        let stored = self.repository.load_adjustments(recipe_id).await?;
        let updated = apply_adjustment_against_base(&stored, ingredient_key, amount, Some(base));
        self.repository.save_adjustments(recipe_id, &updated).await?;
        info!(%recipe_id, ingredient_key, amount, "ingredient override saved");
        Ok(updated)
    }

    /// Remove the override for one ingredient
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn reset(&self, recipe_id: Uuid, ingredient_key: &str) -> AppResult<()> {
        let stored = self.repository.load_adjustments(recipe_id).await?;
        if stored.contains_key(ingredient_key) {
            self.repository
                .save_adjustments(recipe_id, &stored.without(ingredient_key))
                .await?;
            info!(%recipe_id, ingredient_key, "ingredient override reset");
        }
        Ok(())
    }

    /// Remove every override for a recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn reset_all(&self, recipe_id: Uuid) -> AppResult<()> {
        self.repository
            .save_adjustments(recipe_id, &IngredientAdjustments::new())
            .await?;
        info!(%recipe_id, "all ingredient overrides reset");
        Ok(())
    }

    /// Drop overrides whose ingredient no longer exists or lost its amount
    ///
    /// Call after the recipe's ingredient list is edited.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn prune(&self, recipe_id: Uuid, ingredients: &[SnapshotIngredient]) -> AppResult<()> {
        let stored = self.repository.load_adjustments(recipe_id).await?;
        let before = stored.len();
        let kept = stored.retain_numeric_ingredients(ingredients);
        if kept.len() != before {
            self.repository.save_adjustments(recipe_id, &kept).await?;
            debug!(%recipe_id, removed = before - kept.len(), "pruned stale overrides");
        }
        Ok(())
    }
}

fn require_base(ingredient_key: &str, base_amount: Option<f64>) -> AppResult<f64> {
    base_amount.ok_or_else(|| {
        AppError::invalid_input(format!(
            "Ingredient '{ingredient_key}' has no amount and cannot be adjusted"
        ))
    })
}
