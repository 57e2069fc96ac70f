// ABOUTME: Main library entry point for the Heirloom recipe engine
// ABOUTME: Wires amount, scaling, versioning and similarity engines to storage and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Heirloom
//!
//! Core engines for a family recipe keeper: converting ingredient amounts
//! between text and decimals, scaling recipes with per-ingredient manual
//! nudges, comparing saved recipe versions, and spotting duplicate recipes.
//!
//! ## Architecture
//!
//! - **`heirloom-core`**: errors, constants and data models
//! - **`heirloom-intelligence`**: pure engines (fraction, scaling, versioning, similarity)
//! - **Storage**: async repository traits plus an in-memory implementation
//! - **Services**: business operations combining engines and storage
//! - **Config / Logging**: environment-driven configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust
//! use heirloom::fraction::{format_decimal_to_fraction, parse_amount_str};
//!
//! let amount = parse_amount_str("1 1/2").unwrap_or_default();
//! assert_eq!(format_decimal_to_fraction(Some(amount * 2.0)), "3");
//! ```

/// Environment-driven configuration
pub mod config;
/// Logging setup
pub mod logging;
/// Business services built on the engines and storage
pub mod services;
/// Repository traits and implementations
pub mod storage;

/// Error types shared with the core crate
pub mod errors {
    pub use heirloom_core::errors::*;
}

/// Constants shared with the core crate
pub mod constants {
    pub use heirloom_core::constants::*;
}

/// Data models shared with the core crate
pub mod models {
    pub use heirloom_core::models::*;
}

pub use heirloom_intelligence::{fraction, scaling, similarity, versioning};
