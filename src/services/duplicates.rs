// ABOUTME: Duplicate recipe detection service using configured similarity thresholds
// ABOUTME: Wraps the parallel similarity search and logs what it finds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use heirloom_core::errors::AppResult;
use heirloom_core::models::RecipeSnapshot;
use heirloom_intelligence::similarity::{find_duplicates, DuplicateMatch, SimilarityConfig};
use tracing::info;

use crate::config::HeirloomConfig;

/// Duplicate detection with a fixed configuration
#[derive(Debug, Clone, Copy)]
pub struct DuplicateService {
    config: SimilarityConfig,
}

impl DuplicateService {
    /// Create a service with validated similarity settings
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a setting lies outside `[0, 1]`
    pub fn new(config: SimilarityConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a service from loaded configuration
    #[must_use]
    pub const fn from_config(config: &HeirloomConfig) -> Self {
        Self {
            config: config.similarity,
        }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Library recipes that look like duplicates of `candidate`, best match first
    #[must_use]
    pub fn check<K>(
        &self,
        candidate: &RecipeSnapshot,
        existing: &[(K, RecipeSnapshot)],
    ) -> Vec<DuplicateMatch<K>>
    where
        K: Clone + Ord + Send + Sync,
    {
        let matches = find_duplicates(candidate, existing, &self.config);
        info!(
            title = %candidate.title,
            searched = existing.len(),
            matches = matches.len(),
            best = matches.first().map(|m| m.score.overall),
            "duplicate check completed"
        );
        matches
    }
}
