// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for heirloom-cli
// ABOUTME: Provides amount, scaling, comparison and duplicate commands

pub mod amount;
pub mod compare;
pub mod duplicates;
pub mod scale;
