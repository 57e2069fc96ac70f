// ABOUTME: Recipe fixture generators for benchmarks
// ABOUTME: Builds deterministic snapshots and libraries of configurable size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use heirloom::models::{RecipeSnapshot, SnapshotIngredient};

const PANTRY: [&str; 16] = [
    "flour", "sugar", "butter", "egg", "milk", "salt", "baking soda", "vanilla", "cinnamon",
    "oats", "honey", "lemon", "garlic", "onion", "tomato", "rice",
];

/// Deterministic recipe number `index` with `ingredient_count` lines and as many steps
pub fn recipe(index: usize, ingredient_count: usize) -> RecipeSnapshot {
    let mut snapshot = RecipeSnapshot::new(format!("Family Recipe {}", index % 50))
        .with_servings(4)
        .with_tag("family");
    for line in 0..ingredient_count {
        let name = PANTRY[(index + line) % PANTRY.len()];
        snapshot = snapshot.with_ingredient(
            SnapshotIngredient::new(format!("{name} {line}"))
                .with_amount(0.125 * ((index + line) % 24 + 1) as f64)
                .with_unit("cup"),
        );
        snapshot = snapshot.with_instruction(format!("Step for {name}."));
    }
    snapshot
}

/// Library of `count` recipes keyed by position
pub fn library(count: usize) -> Vec<(usize, RecipeSnapshot)> {
    (0..count).map(|index| (index, recipe(index, 12))).collect()
}
