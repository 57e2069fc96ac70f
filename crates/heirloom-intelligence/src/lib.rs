// ABOUTME: Recipe amount, scaling, versioning and similarity engine for Heirloom
// ABOUTME: Extracted from the main crate for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Heirloom Intelligence
//!
//! Pure, synchronous computations over recipe data. Nothing here performs I/O
//! or holds shared state, so every function may be called concurrently from
//! any number of requests.
//!
//! - **fraction**: amount text to decimal and back
//! - **scaling**: scale factors, manual eighth-step adjustments, adjustment maps
//! - **versioning**: snapshot comparison for version history views
//! - **similarity**: duplicate-recipe detection

/// Amount parsing and fraction formatting
pub mod fraction;
/// Scaling and manual adjustment engine
pub mod scaling;
/// Duplicate-recipe similarity scoring
pub mod similarity;
/// Recipe version numbering and diffing
pub mod versioning;

pub use fraction::{
    format_decimal_to_fraction, format_decimal_to_vulgar, parse_amount_str,
    parse_amount_to_decimal, AmountValue,
};
pub use scaling::{
    apply_adjustment, apply_adjustment_against_base, compute_display_amount, decrement_amount,
    display_amount, increment_amount, round_to_step, IngredientAdjustments, NudgeDirection,
};
pub use similarity::{find_duplicates, score_similarity, DuplicateMatch, SimilarityConfig};
pub use versioning::{compare_versions, VersionDiff};
