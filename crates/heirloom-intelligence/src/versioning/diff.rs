// ABOUTME: Structural diff between two recipe snapshots for version comparison views
// ABOUTME: Scalar field records, tag set differences, keyed ingredient and step records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use heirloom_core::constants::amounts::AMOUNT_EQUALITY_EPSILON;
use heirloom_core::models::{RecipeSnapshot, SnapshotIngredient};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Scalar recipe fields compared one by one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnapshotField {
    /// Recipe title
    Title,
    /// Description
    Description,
    /// Preparation time
    PrepTime,
    /// Cooking time
    CookTime,
    /// Servings
    Servings,
    /// Source name
    SourceName,
    /// Source notes
    SourceNotes,
}

impl SnapshotField {
    /// Fields in display order
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Description,
        Self::PrepTime,
        Self::CookTime,
        Self::Servings,
        Self::SourceName,
        Self::SourceNotes,
    ];

    /// Wire name of the field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::PrepTime => "prepTime",
            Self::CookTime => "cookTime",
            Self::Servings => "servings",
            Self::SourceName => "sourceName",
            Self::SourceNotes => "sourceNotes",
        }
    }

    fn value_of(self, snapshot: &RecipeSnapshot) -> Value {
        match self {
            Self::Title => json!(snapshot.title),
            Self::Description => json!(snapshot.description),
            Self::PrepTime => json!(snapshot.prep_time_mins),
            Self::CookTime => json!(snapshot.cook_time_mins),
            Self::Servings => json!(snapshot.servings),
            Self::SourceName => json!(snapshot.source_name),
            Self::SourceNotes => json!(snapshot.source_notes),
        }
    }
}

/// Whether a scalar field differs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// Same value on both sides (including both absent)
    Unchanged,
    /// Values differ
    Changed,
}

/// Comparison record for one scalar field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Field compared
    pub field: SnapshotField,
    /// Outcome
    pub status: ChangeStatus,
    /// Value in the older snapshot (`null` when absent)
    pub old_value: Value,
    /// Value in the newer snapshot (`null` when absent)
    pub new_value: Value,
}

/// Tags present on only one side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDiff {
    /// Present in the newer snapshot only, sorted
    pub added: Vec<String>,
    /// Present in the older snapshot only, sorted
    pub removed: Vec<String>,
}

/// Ingredient attribute that can differ between matched lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientAttribute {
    /// Amount
    Amount,
    /// Unit
    Unit,
    /// Notes
    Notes,
}

/// Outcome for one ingredient line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientChangeKind {
    /// Only in the newer snapshot
    Added,
    /// Only in the older snapshot
    Removed,
    /// In both, with a differing amount, unit or notes
    Changed,
    /// In both and identical
    Unchanged,
}

/// Comparison record for one ingredient, keyed by exact name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientChange {
    /// Outcome
    pub kind: IngredientChangeKind,
    /// Ingredient name (the identity key)
    pub name: String,
    /// Line in the older snapshot
    pub before: Option<SnapshotIngredient>,
    /// Line in the newer snapshot
    pub after: Option<SnapshotIngredient>,
    /// Attributes that differ (empty unless `kind` is `Changed`)
    pub changed_attributes: Vec<IngredientAttribute>,
}

/// Outcome for one instruction step number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionChangeKind {
    /// Step number only in the newer snapshot
    Added,
    /// Step number only in the older snapshot
    Removed,
    /// Same step number, different text
    Modified,
    /// Same step number and text
    Unchanged,
}

/// Comparison record for one instruction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionChange {
    /// Outcome
    pub kind: InstructionChangeKind,
    /// Step number compared
    pub step_number: u32,
    /// Text in the older snapshot
    pub before: Option<String>,
    /// Text in the newer snapshot
    pub after: Option<String>,
}

/// Counts of each kind of change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Scalar fields that changed
    pub fields_changed: usize,
    /// Tags added
    pub tags_added: usize,
    /// Tags removed
    pub tags_removed: usize,
    /// Ingredients added
    pub ingredients_added: usize,
    /// Ingredients removed
    pub ingredients_removed: usize,
    /// Ingredients changed
    pub ingredients_changed: usize,
    /// Steps added
    pub instructions_added: usize,
    /// Steps removed
    pub instructions_removed: usize,
    /// Steps modified
    pub instructions_modified: usize,
}

impl DiffSummary {
    /// Total number of differences
    #[must_use]
    pub const fn total(&self) -> usize {
        self.fields_changed
            + self.tags_added
            + self.tags_removed
            + self.ingredients_added
            + self.ingredients_removed
            + self.ingredients_changed
            + self.instructions_added
            + self.instructions_removed
            + self.instructions_modified
    }
}

/// Full comparison between two snapshots; recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionDiff {
    /// One record per scalar field, in [`SnapshotField::ALL`] order
    pub fields: Vec<FieldChange>,
    /// Tag set differences
    pub tags: TagDiff,
    /// Ingredient records: older-side order first, then added lines in newer-side order
    pub ingredients: Vec<IngredientChange>,
    /// Instruction records ordered by step number
    pub instructions: Vec<InstructionChange>,
}

impl VersionDiff {
    /// Scalar fields whose value changed
    #[must_use]
    pub fn changed_fields(&self) -> Vec<SnapshotField> {
        self.fields
            .iter()
            .filter(|change| change.status == ChangeStatus::Changed)
            .map(|change| change.field)
            .collect()
    }

    /// Counts of each kind of change
    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary {
            fields_changed: self.changed_fields().len(),
            tags_added: self.tags.added.len(),
            tags_removed: self.tags.removed.len(),
            ..DiffSummary::default()
        };
        for change in &self.ingredients {
            match change.kind {
                IngredientChangeKind::Added => summary.ingredients_added += 1,
                IngredientChangeKind::Removed => summary.ingredients_removed += 1,
                IngredientChangeKind::Changed => summary.ingredients_changed += 1,
                IngredientChangeKind::Unchanged => {}
            }
        }
        for change in &self.instructions {
            match change.kind {
                InstructionChangeKind::Added => summary.instructions_added += 1,
                InstructionChangeKind::Removed => summary.instructions_removed += 1,
                InstructionChangeKind::Modified => summary.instructions_modified += 1,
                InstructionChangeKind::Unchanged => {}
            }
        }
        summary
    }

    /// Whether the two snapshots are equivalent
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.summary().total() == 0
    }
}

/// Compare two snapshots, `from` being the older side
///
/// Either side may be the live recipe; the comparer treats both uniformly.
/// Pure and deterministic: the same inputs always produce the same diff.
#[must_use]
pub fn compare_versions(from: &RecipeSnapshot, to: &RecipeSnapshot) -> VersionDiff {
    let diff = VersionDiff {
        fields: compare_fields(from, to),
        tags: compare_tags(&from.tags, &to.tags),
        ingredients: compare_ingredients(&from.ingredients, &to.ingredients),
        instructions: compare_instructions(from, to),
    };
    debug!(summary = ?diff.summary(), "computed recipe version diff");
    diff
}

fn compare_fields(from: &RecipeSnapshot, to: &RecipeSnapshot) -> Vec<FieldChange> {
    SnapshotField::ALL
        .iter()
        .map(|&field| {
            let old_value = field.value_of(from);
            let new_value = field.value_of(to);
            let status = if old_value == new_value {
                ChangeStatus::Unchanged
            } else {
                ChangeStatus::Changed
            };
            FieldChange {
                field,
                status,
                old_value,
                new_value,
            }
        })
        .collect()
}

fn compare_tags(from: &[String], to: &[String]) -> TagDiff {
    let before: BTreeSet<&str> = from.iter().map(String::as_str).collect();
    let after: BTreeSet<&str> = to.iter().map(String::as_str).collect();
    TagDiff {
        added: after.difference(&before).map(|&tag| tag.to_owned()).collect(),
        removed: before.difference(&after).map(|&tag| tag.to_owned()).collect(),
    }
}

fn compare_ingredients(
    from: &[SnapshotIngredient],
    to: &[SnapshotIngredient],
) -> Vec<IngredientChange> {
    // Repeated names pair up by occurrence order
    let mut unmatched: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (index, ingredient) in to.iter().enumerate() {
        unmatched
            .entry(ingredient.name.as_str())
            .or_default()
            .push_back(index);
    }

    let mut matched = vec![false; to.len()];
    let mut changes = Vec::with_capacity(from.len().max(to.len()));

    for before in from {
        let partner = unmatched
            .get_mut(before.name.as_str())
            .and_then(VecDeque::pop_front);
        let Some(index) = partner else {
            changes.push(IngredientChange {
                kind: IngredientChangeKind::Removed,
                name: before.name.clone(),
                before: Some(before.clone()),
                after: None,
                changed_attributes: Vec::new(),
            });
            continue;
        };

        matched[index] = true;
        let after = &to[index];
        let changed_attributes = differing_attributes(before, after);
        let kind = if changed_attributes.is_empty() {
            IngredientChangeKind::Unchanged
        } else {
            IngredientChangeKind::Changed
        };
        changes.push(IngredientChange {
            kind,
            name: before.name.clone(),
            before: Some(before.clone()),
            after: Some(after.clone()),
            changed_attributes,
        });
    }

    for (after, _) in to.iter().zip(&matched).filter(|(_, used)| !**used) {
        changes.push(IngredientChange {
            kind: IngredientChangeKind::Added,
            name: after.name.clone(),
            before: None,
            after: Some(after.clone()),
            changed_attributes: Vec::new(),
        });
    }

    changes
}

fn differing_attributes(
    before: &SnapshotIngredient,
    after: &SnapshotIngredient,
) -> Vec<IngredientAttribute> {
    let mut attributes = Vec::new();
    if !amounts_equal(before.amount, after.amount) {
        attributes.push(IngredientAttribute::Amount);
    }
    if before.unit != after.unit {
        attributes.push(IngredientAttribute::Unit);
    }
    if before.notes != after.notes {
        attributes.push(IngredientAttribute::Notes);
    }
    attributes
}

fn amounts_equal(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => (x - y).abs() < AMOUNT_EQUALITY_EPSILON,
        (None, None) => true,
        _ => false,
    }
}

fn compare_instructions(from: &RecipeSnapshot, to: &RecipeSnapshot) -> Vec<InstructionChange> {
    let index = |snapshot: &RecipeSnapshot| {
        let mut steps: BTreeMap<u32, String> = BTreeMap::new();
        for step in &snapshot.instructions {
            steps
                .entry(step.step_number)
                .or_insert_with(|| step.text.clone());
        }
        steps
    };
    let mut before = index(from);
    let mut after = index(to);

    let numbers: BTreeSet<u32> = before.keys().chain(after.keys()).copied().collect();
    numbers
        .into_iter()
        .map(|step_number| {
            let old_text = before.remove(&step_number);
            let new_text = after.remove(&step_number);
            let kind = match (&old_text, &new_text) {
                (Some(old), Some(new)) if old == new => InstructionChangeKind::Unchanged,
                (Some(_), Some(_)) => InstructionChangeKind::Modified,
                (Some(_), None) => InstructionChangeKind::Removed,
                (None, _) => InstructionChangeKind::Added,
            };
            InstructionChange {
                kind,
                step_number,
                before: old_text,
                after: new_text,
            }
        })
        .collect()
}
