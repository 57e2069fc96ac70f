// ABOUTME: Recipe snapshot models captured whenever a recipe is saved
// ABOUTME: Defines RecipeSnapshot, SnapshotIngredient, and InstructionStep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Single ingredient line as captured in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotIngredient {
    /// Stable per-recipe identifier used as the adjustment key (falls back to the name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Canonical decimal amount (`None` for "to taste" style ingredients)
    #[serde(default)]
    pub amount: Option<f64>,
    /// Measurement unit as entered (cup, tbsp, ...)
    #[serde(default)]
    pub unit: Option<String>,
    /// Ingredient name; the identity key when comparing versions
    pub name: String,
    /// Preparation notes (softened, diced, ...)
    #[serde(default)]
    pub notes: Option<String>,
}

impl SnapshotIngredient {
    /// Create an ingredient line with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            amount: None,
            unit: None,
            name: name.into(),
            notes: None,
        }
    }

    /// Set the amount
    #[must_use]
    pub const fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the unit
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set preparation notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set the stable identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Key under which manual adjustments for this ingredient are stored
    #[must_use]
    pub fn adjustment_key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// Numbered instruction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    /// 1-based step number
    pub step_number: u32,
    /// Step text
    pub text: String,
}

impl InstructionStep {
    /// Create a step
    #[must_use]
    pub fn new(step_number: u32, text: impl Into<String>) -> Self {
        Self {
            step_number,
            text: text.into(),
        }
    }
}

/// Point-in-time capture of a recipe's editable fields
///
/// Used both for stored versions and for the live recipe row once it has been
/// loaded; the comparer treats the two uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSnapshot {
    /// Recipe title
    pub title: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time_mins: Option<u32>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time_mins: Option<u32>,
    /// Number of servings
    #[serde(default)]
    pub servings: Option<u32>,
    /// Where the recipe came from (a person, a book, a site)
    #[serde(default)]
    pub source_name: Option<String>,
    /// Notes about the source
    #[serde(default)]
    pub source_notes: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered ingredient lines
    #[serde(default)]
    pub ingredients: Vec<SnapshotIngredient>,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Vec<InstructionStep>,
}

impl RecipeSnapshot {
    /// Create a snapshot with only a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Set preparation time
    #[must_use]
    pub const fn with_prep_time(mut self, mins: u32) -> Self {
        self.prep_time_mins = Some(mins);
        self
    }

    /// Set cooking time
    #[must_use]
    pub const fn with_cook_time(mut self, mins: u32) -> Self {
        self.cook_time_mins = Some(mins);
        self
    }

    /// Set servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Set the source name
    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Set the source notes
    #[must_use]
    pub fn with_source_notes(mut self, notes: impl Into<String>) -> Self {
        self.source_notes = Some(notes.into());
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: SnapshotIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Append an instruction, numbered after the last existing step
    #[must_use]
    pub fn with_instruction(mut self, text: impl Into<String>) -> Self {
        let next = self
            .instructions
            .iter()
            .map(|step| step.step_number)
            .max()
            .unwrap_or(0)
            + 1;
        self.instructions.push(InstructionStep::new(next, text));
        self
    }

    /// Total time (prep + cook)
    #[must_use]
    pub const fn total_time_mins(&self) -> Option<u32> {
        match (self.prep_time_mins, self.cook_time_mins) {
            (Some(prep), Some(cook)) => Some(prep.saturating_add(cook)),
            (Some(prep), None) => Some(prep),
            (None, Some(cook)) => Some(cook),
            (None, None) => None,
        }
    }

    /// Find an ingredient by its adjustment key
    #[must_use]
    pub fn ingredient_by_key(&self, key: &str) -> Option<&SnapshotIngredient> {
        self.ingredients
            .iter()
            .find(|ingredient| ingredient.adjustment_key() == key)
    }
}
