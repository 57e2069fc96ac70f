// ABOUTME: Environment-based configuration for the Heirloom engine and CLI
// ABOUTME: Parses deployment environment and duplicate-detection tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Configuration is read once at startup into an owned [`HeirloomConfig`] and
//! passed by reference to whatever needs it. Nothing is cached globally.

use std::env;
use std::fmt;

use heirloom_core::constants::env_config;
use heirloom_core::errors::{AppError, AppResult};
use heirloom_intelligence::similarity::SimilarityConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Complete Heirloom configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HeirloomConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Duplicate detection tuning
    pub similarity: SimilarityConfig,
}

impl HeirloomConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a similarity setting is not a number
    /// or falls outside `[0, 1]`.
    pub fn from_env() -> AppResult<Self> {
        let environment =
            Environment::from_str_or_default(&env_var_or(env_config::ENVIRONMENT, "development"));

        let defaults = SimilarityConfig::default();
        let similarity = SimilarityConfig {
            duplicate_threshold: parse_f64_env(
                env_config::DUPLICATE_THRESHOLD,
                defaults.duplicate_threshold,
            )?,
            title_weight: parse_f64_env(env_config::TITLE_WEIGHT, defaults.title_weight)?,
        };
        similarity.validate()?;

        let config = Self {
            environment,
            similarity,
        };
        config.log_summary();
        Ok(config)
    }

    fn log_summary(&self) {
        tracing::debug!(
            environment = %self.environment,
            duplicate_threshold = self.similarity.duplicate_threshold,
            title_weight = self.similarity.title_weight,
            "configuration loaded"
        );
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_f64_env(key: &str, default: f64) -> AppResult<f64> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<f64>().map_err(|e| {
            warn!(key, raw = %raw, "invalid numeric configuration value");
            AppError::config(format!("{key} must be a number, got '{raw}'")).with_source(e)
        }),
        Err(_) => Ok(default),
    }
}
