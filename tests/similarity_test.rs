// ABOUTME: Integration tests for duplicate recipe detection
// ABOUTME: Exercises scoring, thresholds and the configured duplicate service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use heirloom::errors::ErrorCode;
use heirloom::models::{RecipeSnapshot, SnapshotIngredient};
use heirloom::services::DuplicateService;
use heirloom::similarity::{score_similarity, SimilarityConfig};

mod common;

fn recipe(title: &str, ingredients: &[&str]) -> RecipeSnapshot {
    ingredients
        .iter()
        .fold(RecipeSnapshot::new(title), |snapshot, name| {
            snapshot.with_ingredient(SnapshotIngredient::new(*name))
        })
}

#[test]
fn test_scores_are_bounded_and_symmetric() {
    let a = common::shortbread_v1();
    let b = common::shortbread_v2();
    let config = SimilarityConfig::default();

    let forward = score_similarity(&a, &b, &config);
    let backward = score_similarity(&b, &a, &config);
    assert!((0.0..=1.0).contains(&forward.overall));
    assert!((forward.overall - backward.overall).abs() < 1e-12);
}

#[test]
fn test_retyped_recipe_is_flagged_as_duplicate() {
    let service = DuplicateService::new(SimilarityConfig::default()).unwrap();
    let library = vec![
        ("chili".to_owned(), recipe("Texas Chili", &["beef", "beans", "chili powder"])),
        ("shortbread".to_owned(), common::shortbread_v1()),
    ];

    // Re-typed with a new description but the same title and ingredients
    let candidate = common::shortbread_v1().with_description("Nan's Christmas favourite");
    let matches = service.check(&candidate, &library);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "shortbread");
}

#[test]
fn test_lower_threshold_admits_more_matches() {
    let strict = DuplicateService::new(SimilarityConfig::default()).unwrap();
    let loose = DuplicateService::new(SimilarityConfig {
        duplicate_threshold: 0.2,
        title_weight: 0.5,
    })
    .unwrap();

    let candidate = recipe("Banana Bread", &["banana", "flour", "egg"]);
    let library = vec![(1_u32, recipe("Zucchini Bread", &["zucchini", "flour", "egg"]))];

    assert!(strict.check(&candidate, &library).is_empty());
    assert_eq!(loose.check(&candidate, &library).len(), 1);
}

#[test]
fn test_matches_sorted_best_first() {
    let service = DuplicateService::new(SimilarityConfig {
        duplicate_threshold: 0.5,
        title_weight: 0.4,
    })
    .unwrap();
    let candidate = recipe("Apple Pie", &["apple", "flour", "butter", "sugar"]);
    let library = vec![
        ("a".to_owned(), recipe("Apple Pie", &["apple", "flour", "butter"])),
        ("b".to_owned(), recipe("Apple Pie", &["apple", "flour", "butter", "sugar"])),
    ];
    let ids: Vec<String> = service
        .check(&candidate, &library)
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec!["b".to_owned(), "a".to_owned()]);
}

#[test]
fn test_invalid_configuration_rejected() {
    let err = DuplicateService::new(SimilarityConfig {
        duplicate_threshold: 0.8,
        title_weight: -0.1,
    })
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}
