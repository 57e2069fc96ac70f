// ABOUTME: Repository traits for recipe versions and ingredient adjustments
// ABOUTME: Async seams between services and whatever persistence backs them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Services talk to persistence only through these traits. The bundled
//! [`InMemoryRecipeStore`] implements both and is what the CLI and tests use.

/// Exported history files
pub mod history;
/// `DashMap`-backed in-memory implementation
pub mod memory;

pub use history::{HistoryEntry, RecipeHistory};
pub use memory::InMemoryRecipeStore;

use async_trait::async_trait;
use heirloom_core::errors::AppResult;
use heirloom_core::models::{RecipeSnapshot, RecipeVersion};
use heirloom_intelligence::scaling::IngredientAdjustments;
use uuid::Uuid;

/// Live recipe state and its immutable version history
#[async_trait]
pub trait RecipeVersionRepository: Send + Sync {
    /// Live snapshot of a recipe, if the recipe exists
    async fn current_snapshot(&self, recipe_id: Uuid) -> AppResult<Option<RecipeSnapshot>>;

    /// Replace the live snapshot of a recipe (creating the recipe if needed)
    async fn save_current(&self, recipe_id: Uuid, snapshot: &RecipeSnapshot) -> AppResult<()>;

    /// Stored version by number
    async fn get_version(
        &self,
        recipe_id: Uuid,
        version_number: u32,
    ) -> AppResult<Option<RecipeVersion>>;

    /// Capture a new version numbered one past the highest existing number
    async fn create_version(
        &self,
        recipe_id: Uuid,
        snapshot: &RecipeSnapshot,
    ) -> AppResult<RecipeVersion>;

    /// All stored versions of a recipe, newest first
    async fn list_versions(&self, recipe_id: Uuid) -> AppResult<Vec<RecipeVersion>>;
}

/// Per-recipe manual ingredient overrides
///
/// Implementations only ever hold sanitized maps.
#[async_trait]
pub trait AdjustmentRepository: Send + Sync {
    /// Stored overrides for a recipe (empty when none)
    async fn load_adjustments(&self, recipe_id: Uuid) -> AppResult<IngredientAdjustments>;

    /// Replace the stored overrides for a recipe
    async fn save_adjustments(
        &self,
        recipe_id: Uuid,
        adjustments: &IngredientAdjustments,
    ) -> AppResult<()>;
}
