// ABOUTME: Configuration module for Heirloom
// ABOUTME: Loads deployment environment and similarity settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration loading
pub mod environment;

pub use environment::{Environment, HeirloomConfig};
