// ABOUTME: Recipe versioning module: version numbering and snapshot comparison
// ABOUTME: Re-exports the structural diff engine used by version comparison views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Versioning
//!
//! Every save with "create version" semantics captures an immutable
//! [`RecipeSnapshot`](heirloom_core::models::RecipeSnapshot) under the next
//! version number. Comparisons are always recomputed from the two resolved
//! snapshots so a comparison against the live recipe reflects its latest state.

/// Structural snapshot diff
pub mod diff;

pub use diff::{
    compare_versions, ChangeStatus, DiffSummary, FieldChange, IngredientAttribute,
    IngredientChange, IngredientChangeKind, InstructionChange, InstructionChangeKind,
    SnapshotField, TagDiff, VersionDiff,
};

use heirloom_core::constants::versions::FIRST_VERSION_NUMBER;

/// Number assigned to the next captured version given the latest existing one
#[must_use]
pub fn next_version_number(latest: Option<u32>) -> u32 {
    latest.map_or(FIRST_VERSION_NUMBER, |number| number.saturating_add(1))
}
