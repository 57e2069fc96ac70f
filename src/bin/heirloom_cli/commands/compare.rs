// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recipe diff and version history comparison commands for heirloom-cli
// ABOUTME: Loads snapshots from JSON files and runs them through the version service

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use heirloom::models::{RecipeSnapshot, VersionRef};
use heirloom::services::VersionService;
use heirloom::storage::{InMemoryRecipeStore, RecipeHistory};
use heirloom::versioning::{compare_versions, VersionDiff};

use crate::helpers::display::{print_diff, print_json};
use crate::helpers::files::read_json;

fn emit(diff: &VersionDiff, as_json: bool) -> Result<()> {
    if as_json {
        print_json(diff)
    } else {
        print_diff(diff);
        Ok(())
    }
}

/// Compare two snapshot files directly
pub fn diff(from: &Path, to: &Path, as_json: bool) -> Result<()> {
    let older: RecipeSnapshot = read_json(from)?;
    let newer: RecipeSnapshot = read_json(to)?;
    emit(&compare_versions(&older, &newer), as_json)
}

/// Compare two references within an exported history
pub async fn history(path: &Path, from: VersionRef, to: VersionRef, as_json: bool) -> Result<()> {
    let store = Arc::new(InMemoryRecipeStore::new());
    let recipe_id = RecipeHistory::from_path(path)?.load_into(&store).await?;

    let service = VersionService::new(store);
    let diff = service.compare(recipe_id, from, to).await?;
    emit(&diff, as_json)
}
