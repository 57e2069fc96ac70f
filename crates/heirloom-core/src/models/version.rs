// ABOUTME: Recipe version models and version references
// ABOUTME: RecipeVersion wraps an immutable snapshot, VersionRef addresses stored or live state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recipe::RecipeSnapshot;
use crate::constants::versions::{CURRENT_VERSION_SENTINEL, CURRENT_VERSION_TOKEN};
use crate::errors::{AppError, AppResult};

/// Immutable stored version of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeVersion {
    /// Recipe this version belongs to
    pub recipe_id: Uuid,
    /// Monotonically increasing per-recipe number, starting at 1
    pub version_number: u32,
    /// Captured recipe state
    pub snapshot: RecipeSnapshot,
    /// When the version was captured
    pub created_at: DateTime<Utc>,
}

impl RecipeVersion {
    /// Capture a snapshot as the given version number
    #[must_use]
    pub fn new(recipe_id: Uuid, version_number: u32, snapshot: RecipeSnapshot) -> Self {
        Self {
            recipe_id,
            version_number,
            snapshot,
            created_at: Utc::now(),
        }
    }
}

/// Reference to one side of a version comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionRef {
    /// The live, mutable recipe row
    Current,
    /// A stored version number
    Number(u32),
}

impl VersionRef {
    /// Interpret a raw version number from the caller's number space
    ///
    /// `-1` means the live recipe; positive values are stored versions.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for zero, other negative values, or
    /// numbers that do not fit a version number.
    pub fn from_raw(raw: i64) -> AppResult<Self> {
        if raw == CURRENT_VERSION_SENTINEL {
            return Ok(Self::Current);
        }
        match u32::try_from(raw) {
            Ok(number) if number > 0 => Ok(Self::Number(number)),
            _ => Err(AppError::invalid_input(format!(
                "Invalid version number {raw}: expected a positive number or {CURRENT_VERSION_SENTINEL}"
            ))),
        }
    }

    /// Raw number in the caller's number space (`-1` for current)
    #[must_use]
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Current => CURRENT_VERSION_SENTINEL,
            Self::Number(number) => i64::from(number),
        }
    }
}

impl FromStr for VersionRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(CURRENT_VERSION_TOKEN) {
            return Ok(Self::Current);
        }
        let raw: i64 = trimmed
            .parse()
            .map_err(|_| AppError::invalid_input(format!("Invalid version reference: {s}")))?;
        Self::from_raw(raw)
    }
}

impl fmt::Display for VersionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str(CURRENT_VERSION_TOKEN),
            Self::Number(number) => write!(f, "v{number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_sentinel_maps_to_current() {
        assert_eq!(VersionRef::from_raw(-1).unwrap(), VersionRef::Current);
        assert_eq!(VersionRef::Current.to_raw(), -1);
        assert_eq!("current".parse::<VersionRef>().unwrap(), VersionRef::Current);
        assert_eq!("-1".parse::<VersionRef>().unwrap(), VersionRef::Current);
    }

    #[test]
    fn test_positive_numbers_are_stored_versions() {
        assert_eq!(VersionRef::from_raw(3).unwrap(), VersionRef::Number(3));
        assert_eq!(" 12 ".parse::<VersionRef>().unwrap(), VersionRef::Number(12));
    }

    #[test]
    fn test_invalid_references_rejected() {
        for raw in [0, -2, i64::MAX] {
            let err = VersionRef::from_raw(raw).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
        assert!("latest".parse::<VersionRef>().is_err());
    }
}
