// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for heirloom-cli
// ABOUTME: JSON printing and plain-text rendering of version diffs

use anyhow::Result;
use heirloom::versioning::{
    ChangeStatus, IngredientChangeKind, InstructionChangeKind, VersionDiff,
};
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a diff as human-readable lines
pub fn print_diff(diff: &VersionDiff) {
    if diff.is_identical() {
        println!("No differences.");
        return;
    }

    for change in diff.fields.iter().filter(|c| c.status == ChangeStatus::Changed) {
        println!(
            "~ {}: {} -> {}",
            change.field.as_str(),
            change.old_value,
            change.new_value
        );
    }
    for tag in &diff.tags.added {
        println!("+ tag {tag}");
    }
    for tag in &diff.tags.removed {
        println!("- tag {tag}");
    }
    for change in &diff.ingredients {
        match change.kind {
            IngredientChangeKind::Added => println!("+ ingredient {}", change.name),
            IngredientChangeKind::Removed => println!("- ingredient {}", change.name),
            IngredientChangeKind::Changed => {
                let attributes: Vec<String> = change
                    .changed_attributes
                    .iter()
                    .map(|a| format!("{a:?}").to_lowercase())
                    .collect();
                println!("~ ingredient {} ({})", change.name, attributes.join(", "));
            }
            IngredientChangeKind::Unchanged => {}
        }
    }
    for change in &diff.instructions {
        let marker = match change.kind {
            InstructionChangeKind::Added => "+",
            InstructionChangeKind::Removed => "-",
            InstructionChangeKind::Modified => "~",
            InstructionChangeKind::Unchanged => continue,
        };
        println!("{marker} step {}", change.step_number);
    }

    let summary = diff.summary();
    println!("{} change(s)", summary.total());
}
