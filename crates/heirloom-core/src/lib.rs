// ABOUTME: Core types and constants for the Heirloom recipe platform
// ABOUTME: Foundation crate with error handling, recipe snapshot models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Heirloom Core
//!
//! Foundation crate providing shared types and constants for the Heirloom
//! recipe platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Amount stepping, version sentinels, and environment variable names
//! - **models**: Recipe snapshots, versions, scale factors and version references

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (snapshots, versions, scale factors)
pub mod models;
