// ABOUTME: Recipe version service: saving, resolving and comparing versions
// ABOUTME: Maps version references to snapshots and runs the structural diff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use heirloom_core::errors::{AppError, AppResult};
use heirloom_core::models::{RecipeSnapshot, RecipeVersion, VersionRef};
use heirloom_intelligence::versioning::{compare_versions, VersionDiff};
use tracing::{debug, info};
use uuid::Uuid;

use crate::storage::RecipeVersionRepository;

/// Recipe save and version comparison operations
#[derive(Clone)]
pub struct VersionService {
    repository: Arc<dyn RecipeVersionRepository>,
}

impl VersionService {
    /// Create a service over the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeVersionRepository>) -> Self {
        Self { repository }
    }

    /// Save the live recipe, optionally capturing a new version of it
    ///
    /// Returns the captured version when one was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn save_recipe(
        &self,
        recipe_id: Uuid,
        snapshot: &RecipeSnapshot,
        create_version: bool,
    ) -> AppResult<Option<RecipeVersion>> {
        self.repository.save_current(recipe_id, snapshot).await?;
        if !create_version {
            return Ok(None);
        }
        let version = self.repository.create_version(recipe_id, snapshot).await?;
        info!(%recipe_id, version = version.version_number, "recipe version created");
        Ok(Some(version))
    }

    /// Snapshot addressed by a version reference
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the recipe or the version does not exist
    pub async fn resolve(&self, recipe_id: Uuid, reference: VersionRef) -> AppResult<RecipeSnapshot> {
        let snapshot = match reference {
            VersionRef::Current => self.repository.current_snapshot(recipe_id).await?,
            VersionRef::Number(number) => self
                .repository
                .get_version(recipe_id, number)
                .await?
                .map(|version| version.snapshot),
        };
        snapshot.ok_or_else(|| {
            debug!(%recipe_id, version = %reference, "version reference did not resolve");
            AppError::not_found(format!("Recipe version {reference}"))
                .with_resource_id(recipe_id.to_string())
        })
    }

    /// Stored versions, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn list_versions(&self, recipe_id: Uuid) -> AppResult<Vec<RecipeVersion>> {
        self.repository.list_versions(recipe_id).await
    }

    /// Compare two versions of a recipe, `from` being the older side
    ///
    /// # Errors
    ///
    /// Returns a not-found error if either side does not resolve
    pub async fn compare(
        &self,
        recipe_id: Uuid,
        from: VersionRef,
        to: VersionRef,
    ) -> AppResult<VersionDiff> {
        let older = self.resolve(recipe_id, from).await?;
        let newer = self.resolve(recipe_id, to).await?;
        let diff = compare_versions(&older, &newer);
        info!(
            %recipe_id,
            from = %from,
            to = %to,
            changes = diff.summary().total(),
            "compared recipe versions"
        );
        Ok(diff)
    }

    /// Compare using raw version numbers where `-1` means the live recipe
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for numbers that are neither `-1` nor
    /// positive, and a not-found error if either side does not resolve
    pub async fn compare_raw(&self, recipe_id: Uuid, from: i64, to: i64) -> AppResult<VersionDiff> {
        let from = VersionRef::from_raw(from)?;
        let to = VersionRef::from_raw(to)?;
        self.compare(recipe_id, from, to).await
    }
}
