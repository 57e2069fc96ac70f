// ABOUTME: Scale factor selected for a recipe view
// ABOUTME: Closed set of multipliers with the manual-adjustment mode rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Multiplier applied uniformly to every ingredient in a recipe view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum ScaleFactor {
    /// Recipe as written; manual adjustments apply
    #[default]
    One,
    /// Doubled
    Two,
    /// Tripled
    Three,
}

impl ScaleFactor {
    /// All selectable factors in display order
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Numeric multiplier
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::Two => 2.0,
            Self::Three => 3.0,
        }
    }

    /// Whether per-ingredient manual adjustment is offered at this scale
    #[must_use]
    pub const fn allows_manual_adjustment(self) -> bool {
        matches!(self, Self::One)
    }
}

impl TryFrom<u8> for ScaleFactor {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(AppError::invalid_input(format!(
                "Unsupported scale factor {other}: expected 1, 2 or 3"
            ))),
        }
    }
}

impl From<ScaleFactor> for u8 {
    fn from(value: ScaleFactor) -> Self {
        match value {
            ScaleFactor::One => 1,
            ScaleFactor::Two => 2,
            ScaleFactor::Three => 3,
        }
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", u8::from(*self))
    }
}
