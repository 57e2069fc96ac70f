// ABOUTME: Core data models for recipes, versions, and scaling
// ABOUTME: Re-exports snapshot, version reference and scale factor types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe snapshot, ingredient and instruction models
pub mod recipe;
/// Scale factor selection
pub mod scale;
/// Stored versions and version references
pub mod version;

pub use recipe::{InstructionStep, RecipeSnapshot, SnapshotIngredient};
pub use scale::ScaleFactor;
pub use version::{RecipeVersion, VersionRef};
