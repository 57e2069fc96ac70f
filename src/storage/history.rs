// ABOUTME: Exported recipe history files: a live snapshot plus its stored versions
// ABOUTME: Loads a history from JSON and seeds an in-memory store with it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use heirloom_core::errors::{AppError, AppResult};
use heirloom_core::models::{RecipeSnapshot, RecipeVersion};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{InMemoryRecipeStore, RecipeVersionRepository};

/// One stored version inside a history export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Stored version number
    pub version_number: u32,
    /// Captured state
    pub snapshot: RecipeSnapshot,
}

/// A recipe's live state and version history as exported to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeHistory {
    /// Recipe identifier; a fresh one is assigned on load when absent
    #[serde(default)]
    pub recipe_id: Option<Uuid>,
    /// Live recipe
    pub current: RecipeSnapshot,
    /// Stored versions in any order
    #[serde(default)]
    pub versions: Vec<HistoryEntry>,
}

impl RecipeHistory {
    /// Read a history export from disk
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read and a
    /// serialization error if it is not a valid history
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read {}", path.display())).with_source(e)
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Seed a store with this history, returning the recipe id used
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the live snapshot
    pub async fn load_into(self, store: &InMemoryRecipeStore) -> AppResult<Uuid> {
        let recipe_id = self.recipe_id.unwrap_or_else(Uuid::new_v4);
        store.save_current(recipe_id, &self.current).await?;
        let count = self.versions.len();
        for entry in self.versions {
            store.import_version(RecipeVersion::new(
                recipe_id,
                entry.version_number,
                entry.snapshot,
            ));
        }
        debug!(%recipe_id, versions = count, "loaded recipe history");
        Ok(recipe_id)
    }
}
