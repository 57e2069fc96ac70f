// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for heirloom-cli
// ABOUTME: File loading and output formatting shared across commands

pub mod display;
pub mod files;
