// ABOUTME: Duplicate-recipe detection by title and ingredient overlap
// ABOUTME: Jaccard similarity scoring with parallel search over an existing library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Duplicate Similarity
//!
//! When a recipe is scanned or typed in, the library is checked for recipes
//! that look like the same dish. Titles are compared as sets of lowercase word
//! tokens and ingredient lists as sets of lowercase names; both use Jaccard
//! similarity. The overall score is a weighted blend of the two.

use std::collections::HashSet;

use heirloom_core::constants::similarity::{DEFAULT_DUPLICATE_THRESHOLD, DEFAULT_TITLE_WEIGHT};
use heirloom_core::errors::{AppError, AppResult};
use heirloom_core::models::RecipeSnapshot;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Weights and threshold for duplicate detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Overall score at or above which two recipes count as duplicates
    pub duplicate_threshold: f64,
    /// Share of the overall score contributed by the title (rest is ingredients)
    pub title_weight: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
            title_weight: DEFAULT_TITLE_WEIGHT,
        }
    }
}

impl SimilarityConfig {
    /// Check that both values lie in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending value.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("duplicate_threshold", self.duplicate_threshold),
            ("title_weight", self.title_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::config(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Component and overall similarity, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScore {
    /// Title token overlap
    pub title: f64,
    /// Ingredient name overlap (`None` when neither recipe lists ingredients)
    pub ingredients: Option<f64>,
    /// Weighted blend
    pub overall: f64,
}

/// Library entry that looks like a duplicate of the candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateMatch<K> {
    /// Identifier of the existing recipe
    pub id: K,
    /// How similar it is
    pub score: SimilarityScore,
}

/// Score how alike two recipes are
#[must_use]
pub fn score_similarity(
    a: &RecipeSnapshot,
    b: &RecipeSnapshot,
    config: &SimilarityConfig,
) -> SimilarityScore {
    let title = jaccard(&title_tokens(&a.title), &title_tokens(&b.title)).unwrap_or(0.0);
    let ingredients = jaccard(&ingredient_names(a), &ingredient_names(b));
    let overall = ingredients.map_or(title, |ingredients| {
        config
            .title_weight
            .mul_add(title, (1.0 - config.title_weight) * ingredients)
    });
    SimilarityScore {
        title,
        ingredients,
        overall,
    }
}

/// Find library recipes similar enough to be duplicates of `candidate`
///
/// Results are sorted by descending overall score, ties broken by id.
#[must_use]
pub fn find_duplicates<K>(
    candidate: &RecipeSnapshot,
    existing: &[(K, RecipeSnapshot)],
    config: &SimilarityConfig,
) -> Vec<DuplicateMatch<K>>
where
    K: Clone + Ord + Send + Sync,
{
    let mut matches: Vec<DuplicateMatch<K>> = existing
        .par_iter()
        .filter_map(|(id, snapshot)| {
            let score = score_similarity(candidate, snapshot, config);
            (score.overall >= config.duplicate_threshold).then(|| DuplicateMatch {
                id: id.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .overall
            .total_cmp(&a.score.overall)
            .then_with(|| a.id.cmp(&b.id))
    });
    matches
}

fn title_tokens(title: &str) -> HashSet<String> {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn ingredient_names(snapshot: &RecipeSnapshot) -> HashSet<String> {
    snapshot
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

/// `|A ∩ B| / |A ∪ B|`, or `None` when both sets are empty
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> Option<f64> {
    let union = a.union(b).count();
    if union == 0 {
        return None;
    }
    let intersection = a.intersection(b).count();
    Some(intersection as f64 / union as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heirloom_core::models::SnapshotIngredient;

    fn recipe(title: &str, ingredients: &[&str]) -> RecipeSnapshot {
        ingredients
            .iter()
            .fold(RecipeSnapshot::new(title), |snapshot, name| {
                snapshot.with_ingredient(SnapshotIngredient::new(*name))
            })
    }

    #[test]
    fn test_identical_recipes_score_one() {
        let a = recipe("Gran's Shortbread", &["butter", "flour", "sugar"]);
        let score = score_similarity(&a, &a, &SimilarityConfig::default());
        assert!((score.overall - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_title_only_when_no_ingredients() {
        let a = recipe("Tomato Soup", &[]);
        let b = recipe("tomato soup!", &[]);
        let score = score_similarity(&a, &b, &SimilarityConfig::default());
        assert_eq!(score.ingredients, None);
        assert!((score.overall - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_blend() {
        let a = recipe("Banana Bread", &["banana", "flour", "egg", "butter"]);
        let b = recipe("Banana Muffins", &["Banana", "flour", "egg", "oil"]);
        let score = score_similarity(&a, &b, &SimilarityConfig::default());
        // title 1/3, ingredients 3/5
        let expected = 0.4 * (1.0 / 3.0) + 0.6 * 0.6;
        assert!((score.overall - expected).abs() < 1e-9);
    }

    #[test]
    fn test_find_duplicates_sorted_and_thresholded() {
        let candidate = recipe("Shortbread", &["butter", "flour", "sugar"]);
        let library = vec![
            (2_u32, recipe("Shortbread", &["butter", "flour", "sugar"])),
            (1_u32, recipe("Shortbread", &["butter", "flour", "sugar", "salt"])),
            (3_u32, recipe("Chili", &["beans", "beef"])),
        ];
        let matches = find_duplicates(&candidate, &library, &SimilarityConfig::default());
        let ids: Vec<u32> = matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_config_validation() {
        assert!(SimilarityConfig::default().validate().is_ok());
        let bad = SimilarityConfig {
            duplicate_threshold: 1.5,
            ..SimilarityConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
