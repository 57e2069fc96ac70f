// ABOUTME: Shared test utilities and fixtures for Heirloom integration tests
// ABOUTME: Provides quiet logging setup, sample recipes and service wiring helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `heirloom`
//!
//! Common fixtures reduce duplication across integration tests.

use std::sync::{Arc, Once};

use heirloom::models::{RecipeSnapshot, SnapshotIngredient};
use heirloom::services::{AdjustmentService, VersionService};
use heirloom::storage::InMemoryRecipeStore;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary helper may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Grandma's shortbread as first typed in
pub fn shortbread_v1() -> RecipeSnapshot {
    RecipeSnapshot::new("Grandma's Shortbread")
        .with_description("Crumbly butter biscuits")
        .with_prep_time(15)
        .with_cook_time(20)
        .with_servings(24)
        .with_source("Grandma Rose")
        .with_tag("baking")
        .with_tag("holiday")
        .with_ingredient(
            SnapshotIngredient::new("butter")
                .with_amount(1.0)
                .with_unit("cup")
                .with_notes("softened"),
        )
        .with_ingredient(
            SnapshotIngredient::new("sugar")
                .with_amount(0.5)
                .with_unit("cup"),
        )
        .with_ingredient(
            SnapshotIngredient::new("flour")
                .with_amount(2.0)
                .with_unit("cup"),
        )
        .with_ingredient(SnapshotIngredient::new("salt"))
        .with_instruction("Cream butter and sugar.")
        .with_instruction("Mix in flour.")
        .with_instruction("Bake at 325F.")
}

/// The same recipe after a family edit
pub fn shortbread_v2() -> RecipeSnapshot {
    RecipeSnapshot::new("Grandma's Shortbread")
        .with_description("Crumbly butter biscuits")
        .with_prep_time(15)
        .with_cook_time(25)
        .with_servings(24)
        .with_source("Grandma Rose")
        .with_tag("baking")
        .with_tag("cookies")
        .with_ingredient(
            SnapshotIngredient::new("butter")
                .with_amount(1.0)
                .with_unit("cup")
                .with_notes("cold"),
        )
        .with_ingredient(
            SnapshotIngredient::new("sugar")
                .with_amount(0.75)
                .with_unit("cup"),
        )
        .with_ingredient(
            SnapshotIngredient::new("flour")
                .with_amount(2.0)
                .with_unit("cup"),
        )
        .with_ingredient(
            SnapshotIngredient::new("vanilla")
                .with_amount(1.0)
                .with_unit("tsp"),
        )
        .with_instruction("Cream butter and sugar.")
        .with_instruction("Fold in flour gently.")
        .with_instruction("Bake at 325F.")
        .with_instruction("Cool on a rack.")
}

/// In-memory store with version and adjustment services over it
pub fn create_services() -> (Arc<InMemoryRecipeStore>, VersionService, AdjustmentService) {
    init_test_logging();
    let store = Arc::new(InMemoryRecipeStore::new());
    let versions = VersionService::new(store.clone());
    let adjustments = AdjustmentService::new(store.clone());
    (store, versions, adjustments)
}
