// ABOUTME: Integration tests for loading exported recipe histories from disk
// ABOUTME: Seeds the in-memory store from a JSON file and compares versions through it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::sync::Arc;

use heirloom::errors::ErrorCode;
use heirloom::models::VersionRef;
use heirloom::services::VersionService;
use heirloom::storage::{HistoryEntry, InMemoryRecipeStore, RecipeHistory};
use heirloom::versioning::SnapshotField;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

mod common;

fn write_history(dir: &TempDir, history: &RecipeHistory) -> std::path::PathBuf {
    let path = dir.path().join("history.json");
    fs::write(&path, serde_json::to_string_pretty(history).unwrap()).unwrap();
    path
}

#[tokio::test]
async fn test_history_round_trips_through_store() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let recipe_id = Uuid::new_v4();
    let history = RecipeHistory {
        recipe_id: Some(recipe_id),
        current: common::shortbread_v2(),
        versions: vec![HistoryEntry {
            version_number: 3,
            snapshot: common::shortbread_v1(),
        }],
    };
    let path = write_history(&dir, &history);

    let store = Arc::new(InMemoryRecipeStore::new());
    let loaded_id = RecipeHistory::from_path(&path)
        .unwrap()
        .load_into(&store)
        .await
        .unwrap();
    assert_eq!(loaded_id, recipe_id);

    let service = VersionService::new(store);
    let diff = service
        .compare(recipe_id, VersionRef::Number(3), VersionRef::Current)
        .await
        .unwrap();
    assert_eq!(diff.changed_fields(), vec![SnapshotField::CookTime]);

    // Saving a new version continues after the imported numbers
    let next = service
        .save_recipe(recipe_id, &common::shortbread_v2(), true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(next.version_number, 4);
}

#[tokio::test]
async fn test_minimal_history_gets_fresh_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minimal.json");
    fs::write(&path, json!({ "current": { "title": "Toast" } }).to_string()).unwrap();

    let store = InMemoryRecipeStore::new();
    RecipeHistory::from_path(&path)
        .unwrap()
        .load_into(&store)
        .await
        .unwrap();
    assert_eq!(store.recipe_count(), 1);
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = RecipeHistory::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = RecipeHistory::from_path(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}
