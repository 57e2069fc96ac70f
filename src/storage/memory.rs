// ABOUTME: In-memory recipe store backed by concurrent DashMaps
// ABOUTME: Implements version history and adjustment repositories for the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use dashmap::DashMap;
use heirloom_core::errors::AppResult;
use heirloom_core::models::{RecipeSnapshot, RecipeVersion};
use heirloom_intelligence::scaling::IngredientAdjustments;
use heirloom_intelligence::versioning::next_version_number;
use tracing::debug;
use uuid::Uuid;

use super::{AdjustmentRepository, RecipeVersionRepository};

/// Concurrent in-memory store for recipes, versions and adjustments
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    current: DashMap<Uuid, RecipeSnapshot>,
    versions: DashMap<Uuid, Vec<RecipeVersion>>,
    adjustments: DashMap<Uuid, IngredientAdjustments>,
}

impl InMemoryRecipeStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an existing version as-is, keeping its number and timestamp
    ///
    /// Used when loading exported history. A version with the same number
    /// replaces the stored one.
    pub fn import_version(&self, version: RecipeVersion) {
        let mut history = self.versions.entry(version.recipe_id).or_default();
        history.retain(|existing| existing.version_number != version.version_number);
        history.push(version);
    }

    /// Number of recipes with a live snapshot
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.current.len()
    }
}

#[async_trait]
impl RecipeVersionRepository for InMemoryRecipeStore {
    async fn current_snapshot(&self, recipe_id: Uuid) -> AppResult<Option<RecipeSnapshot>> {
        Ok(self.current.get(&recipe_id).map(|entry| entry.value().clone()))
    }

    async fn save_current(&self, recipe_id: Uuid, snapshot: &RecipeSnapshot) -> AppResult<()> {
        self.current.insert(recipe_id, snapshot.clone());
        debug!(%recipe_id, "saved live recipe snapshot");
        Ok(())
    }

    async fn get_version(
        &self,
        recipe_id: Uuid,
        version_number: u32,
    ) -> AppResult<Option<RecipeVersion>> {
        Ok(self.versions.get(&recipe_id).and_then(|history| {
            history
                .iter()
                .find(|version| version.version_number == version_number)
                .cloned()
        }))
    }

    async fn create_version(
        &self,
        recipe_id: Uuid,
        snapshot: &RecipeSnapshot,
    ) -> AppResult<RecipeVersion> {
        // The entry guard holds the shard lock, so concurrent saves get distinct numbers
        let mut history = self.versions.entry(recipe_id).or_default();
        let latest = history.iter().map(|version| version.version_number).max();
        let version = RecipeVersion::new(recipe_id, next_version_number(latest), snapshot.clone());
        history.push(version.clone());
        debug!(%recipe_id, version = version.version_number, "captured recipe version");
        Ok(version)
    }

    async fn list_versions(&self, recipe_id: Uuid) -> AppResult<Vec<RecipeVersion>> {
        let mut history = self
            .versions
            .get(&recipe_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        history.sort_by(|a, b| b.version_number.cmp(&a.version_number));
        Ok(history)
    }
}

#[async_trait]
impl AdjustmentRepository for InMemoryRecipeStore {
    async fn load_adjustments(&self, recipe_id: Uuid) -> AppResult<IngredientAdjustments> {
        Ok(self
            .adjustments
            .get(&recipe_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn save_adjustments(
        &self,
        recipe_id: Uuid,
        adjustments: &IngredientAdjustments,
    ) -> AppResult<()> {
        let sanitized = adjustments.clone().sanitized();
        if sanitized.is_empty() {
            self.adjustments.remove(&recipe_id);
        } else {
            self.adjustments.insert(recipe_id, sanitized);
        }
        debug!(%recipe_id, "saved ingredient adjustments");
        Ok(())
    }
}
