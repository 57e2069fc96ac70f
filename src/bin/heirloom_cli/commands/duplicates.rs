// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Duplicate detection command for heirloom-cli
// ABOUTME: Scores a candidate recipe against every recipe in a library file

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use heirloom::config::HeirloomConfig;
use heirloom::models::RecipeSnapshot;
use heirloom::services::DuplicateService;

use crate::helpers::display::print_json;
use crate::helpers::files::read_json;

/// Print library recipes that look like duplicates of the candidate
pub fn check(config: &HeirloomConfig, candidate: &Path, library: &Path, as_json: bool) -> Result<()> {
    let candidate: RecipeSnapshot = read_json(candidate)?;
    let library: BTreeMap<String, RecipeSnapshot> = read_json(library)?;
    let existing: Vec<(String, RecipeSnapshot)> = library.into_iter().collect();

    let service = DuplicateService::from_config(config);
    let matches = service.check(&candidate, &existing);

    if as_json {
        return print_json(&matches);
    }
    if matches.is_empty() {
        println!("No likely duplicates.");
    }
    for found in &matches {
        println!(
            "{}  {:.0}%  {}",
            found.id,
            found.score.overall * 100.0,
            existing
                .iter()
                .find(|(id, _)| *id == found.id)
                .map_or("", |(_, snapshot)| snapshot.title.as_str())
        );
    }
    Ok(())
}
