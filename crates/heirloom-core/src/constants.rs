// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Amount stepping, tolerances, version sentinels, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Ingredient amount stepping and display tolerances
pub mod amounts {
    /// Manual adjustment step (one eighth)
    pub const ADJUSTMENT_STEP: f64 = 0.125;
    /// Smallest amount a numeric ingredient can be nudged down to
    pub const MIN_ADJUSTED_AMOUNT: f64 = 0.125;
    /// Denominator used when rounding scaled amounts for display
    pub const DISPLAY_STEP_DENOMINATOR: f64 = 8.0;
    /// Relative tolerance for the continued-fraction approximation
    pub const FRACTION_TOLERANCE: f64 = 1.0e-6;
    /// Hard cap on continued-fraction expansion terms
    pub const MAX_FRACTION_TERMS: usize = 64;
    /// Absolute tolerance when comparing two stored amounts for equality
    pub const AMOUNT_EQUALITY_EPSILON: f64 = 1.0e-9;
}

/// Recipe version numbering
pub mod versions {
    /// Raw version number callers use to mean "the live recipe row"
    pub const CURRENT_VERSION_SENTINEL: i64 = -1;
    /// Token accepted in place of the sentinel
    pub const CURRENT_VERSION_TOKEN: &str = "current";
    /// First version number assigned to a recipe
    pub const FIRST_VERSION_NUMBER: u32 = 1;
}

/// Duplicate detection defaults
pub mod similarity {
    /// Overall score at or above which two recipes are reported as duplicates
    pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.8;
    /// Share of the overall score contributed by the title
    pub const DEFAULT_TITLE_WEIGHT: f64 = 0.4;
}

/// Service identity
pub mod service_names {
    /// Name reported in structured startup logs
    pub const HEIRLOOM: &str = "heirloom";
    /// CLI binary name
    pub const HEIRLOOM_CLI: &str = "heirloom-cli";
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Log level / filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Duplicate detection threshold override
    pub const DUPLICATE_THRESHOLD: &str = "HEIRLOOM_DUPLICATE_THRESHOLD";
    /// Title weight override for similarity scoring
    pub const TITLE_WEIGHT: &str = "HEIRLOOM_TITLE_WEIGHT";
}
