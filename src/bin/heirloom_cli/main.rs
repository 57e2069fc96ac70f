// ABOUTME: Heirloom CLI - command-line front end for the recipe amount and version engines
// ABOUTME: Parses and formats amounts, scales and nudges ingredients, diffs recipes, finds duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Parse an amount as typed on a recipe card
//! heirloom-cli amount parse "1 1/2"
//!
//! # Format a decimal as a kitchen fraction
//! heirloom-cli amount format 0.333 --vulgar
//!
//! # Show an ingredient at double scale
//! heirloom-cli scale --base "3/4" --factor 2
//!
//! # Nudge an amount down twice
//! heirloom-cli nudge 1/2 down --times 2
//!
//! # Compare two recipe files
//! heirloom-cli diff old.json new.json
//!
//! # Compare stored version 2 against the live recipe
//! heirloom-cli history compare history.json 2 -1
//!
//! # Look for duplicates of a new recipe in a library export
//! heirloom-cli --json duplicates candidate.json library.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use heirloom::config::HeirloomConfig;
use heirloom::constants::{env_config, service_names};
use heirloom::logging::LoggingConfig;
use heirloom::models::VersionRef;
use heirloom::scaling::NudgeDirection;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Upper bound for `nudge --times`; every step is printed
const MAX_NUDGE_STEPS: i64 = 1_000;

#[derive(Parser)]
#[command(
    name = "heirloom-cli",
    about = "Heirloom recipe amount and version tools",
    long_about = "Command-line access to Heirloom's fraction converter, scaling engine, version diff and duplicate detection."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Amount parsing and formatting
    Amount {
        #[command(subcommand)]
        action: AmountCommand,
    },

    /// Show an ingredient amount at a scale factor
    Scale {
        /// Base amount as written ("1 1/2", "0.75", "½")
        #[arg(long)]
        base: String,

        /// Scale factor (1, 2 or 3)
        #[arg(long, default_value = "1")]
        factor: u8,

        /// Manual override amount (only honoured at 1x)
        #[arg(long = "override")]
        manual_override: Option<String>,
    },

    /// Step an amount up or down by eighths
    Nudge {
        /// Starting amount
        amount: String,

        /// Direction to step
        #[arg(value_enum)]
        direction: Direction,

        /// Number of steps
        #[arg(
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u32).range(1..=MAX_NUDGE_STEPS)
        )]
        times: u32,
    },

    /// Compare two recipe snapshot files
    Diff {
        /// Older snapshot (JSON)
        from: PathBuf,

        /// Newer snapshot (JSON)
        to: PathBuf,
    },

    /// Version history commands
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Find recipes in a library that look like a candidate
    Duplicates {
        /// Candidate snapshot (JSON)
        candidate: PathBuf,

        /// Library file: JSON object of recipe id to snapshot
        library: PathBuf,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AmountCommand {
    /// Parse amount text to a decimal
    Parse {
        /// Amount text
        text: String,
    },

    /// Format a decimal as a fraction
    Format {
        /// Decimal value
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Use Unicode fraction glyphs where possible
        #[arg(long)]
        vulgar: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HistoryCommand {
    /// Compare two versions from a history file
    Compare {
        /// History file: live snapshot plus stored versions (JSON)
        history: PathBuf,

        /// Older side: version number, or -1 / "current" for the live recipe
        #[arg(allow_hyphen_values = true)]
        from: VersionRef,

        /// Newer side: version number, or -1 / "current" for the live recipe
        #[arg(allow_hyphen_values = true)]
        to: VersionRef,
    },
}

/// Nudge direction as accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

impl From<Direction> for NudgeDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Stay quiet unless asked: stdout carries command output
    let mut logging = LoggingConfig::from_env().with_service_name(service_names::HEIRLOOM_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    } else if env::var(env_config::RUST_LOG).is_err() {
        logging = logging.with_level("warn");
    }
    logging.init()?;

    let config = HeirloomConfig::from_env()?;
    debug!(environment = %config.environment, "heirloom-cli starting");

    match cli.command {
        Command::Amount { action } => match action {
            AmountCommand::Parse { text } => commands::amount::parse(&text, cli.json)?,
            AmountCommand::Format { value, vulgar } => {
                commands::amount::format(value, vulgar, cli.json)?;
            }
        },
        Command::Scale {
            base,
            factor,
            manual_override,
        } => commands::scale::scale(&base, factor, manual_override.as_deref(), cli.json)?,
        Command::Nudge {
            amount,
            direction,
            times,
        } => commands::scale::nudge(&amount, direction.into(), times, cli.json)?,
        Command::Diff { from, to } => commands::compare::diff(&from, &to, cli.json)?,
        Command::History { action } => match action {
            HistoryCommand::Compare { history, from, to } => {
                commands::compare::history(&history, from, to, cli.json).await?;
            }
        },
        Command::Duplicates { candidate, library } => {
            commands::duplicates::check(&config, &candidate, &library, cli.json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_nudge_times(times: &str) -> Option<u32> {
        let cli =
            Cli::try_parse_from(["heirloom-cli", "nudge", "1/2", "up", "--times", times]).ok()?;
        match cli.command {
            Command::Nudge { times, .. } => Some(times),
            _ => None,
        }
    }

    #[test]
    fn test_nudge_times_is_bounded() {
        assert_eq!(parse_nudge_times("3"), Some(3));
        assert_eq!(parse_nudge_times("1000"), Some(1_000));
        assert_eq!(parse_nudge_times("1001"), None);
        assert_eq!(parse_nudge_times("4000000000"), None);
        assert_eq!(parse_nudge_times("0"), None);
    }

    #[test]
    fn test_nudge_times_defaults_to_one() {
        let parsed = Cli::try_parse_from(["heirloom-cli", "nudge", "1/2", "down"]);
        assert!(matches!(
            parsed.map(|cli| cli.command),
            Ok(Command::Nudge { times: 1, .. })
        ));
    }
}
