// ABOUTME: Domain service layer combining the pure engines with storage
// ABOUTME: Version history, ingredient adjustment and duplicate detection services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services own the business rules that sit between a caller and the
//! repositories: validation, not-found handling and logging. They hold their
//! repositories behind `Arc` and are cheap to share across tasks.

/// Manual ingredient adjustments and scaled display rows
pub mod adjustments;
/// Duplicate recipe detection with configured thresholds
pub mod duplicates;
/// Recipe saving, version resolution and comparison
pub mod versions;

pub use adjustments::{AdjustmentService, IngredientView};
pub use duplicates::DuplicateService;
pub use versions::VersionService;
