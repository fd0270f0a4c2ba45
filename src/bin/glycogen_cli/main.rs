// ABOUTME: Glycogen CLI - command-line driver for the glycogen tank simulation engine
// ABOUTME: Runs tank, simulation, tapering, and minimum-intake commands from JSON scenario files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors
//!
//! Usage:
//! ```bash
//! # Show the glycogen tank of the scenario's athlete
//! glycogen-cli tank --scenario ride.json
//!
//! # Simulate the activity, printing every 10th minute
//! glycogen-cli simulate --scenario ride.json --every 10
//!
//! # Run the tapering days, then race on the resulting tank
//! glycogen-cli taper --scenario taper.json --simulate
//!
//! # Find the lowest sustaining carbohydrate intake, as JSON
//! glycogen-cli --json min-intake --scenario ride.json
//!
//! # Save the scenario's profile for a user and reuse it later
//! glycogen-cli profile save --user 6f1c... --scenario ride.json
//! glycogen-cli simulate --scenario ride.json --user 6f1c...
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glycogen_tank::errors::{AppError, AppResult};
use glycogen_tank::logging::LoggingConfig;
use tracing::info;
use uuid::Uuid;

use helpers::scenario::ScenarioArgs;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "glycogen-cli",
    about = "Glycogen tank simulation CLI",
    long_about = "Estimate glycogen reserves, simulate their use during exercise, plan tapering and find the minimum carbohydrate intake."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Profile store directory (defaults to the platform data directory)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the glycogen tank
    Tank {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Simulate an activity minute by minute
    Simulate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Print one trace row every N minutes
        #[arg(long, default_value = "15")]
        every: u32,
    },

    /// Run a multi-day tapering trajectory
    Taper {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Simulate the scenario's activity on the final tank
        #[arg(long)]
        simulate: bool,
    },

    /// Find the lowest sustaining carbohydrate intake rate
    MinIntake {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Profile storage commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Save the scenario's profile for a user
    Save {
        /// User id
        #[arg(long)]
        user: Uuid,

        /// Scenario file holding the profile
        #[arg(long)]
        scenario: PathBuf,
    },

    /// Show a user's stored profile
    Show {
        /// User id
        #[arg(long)]
        user: Uuid,
    },

    /// Delete a user's stored profile
    Delete {
        /// User id
        #[arg(long)]
        user: Uuid,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    info!("Glycogen CLI");

    let context = commands::CliContext::new(cli.json, cli.store_dir)?;

    match cli.command {
        Command::Tank { scenario } => commands::tank::run(&context, &scenario)?,
        Command::Simulate { scenario, every } => {
            commands::simulate::run(&context, &scenario, every)?;
        }
        Command::Taper { scenario, simulate } => {
            commands::taper::run(&context, &scenario, simulate)?;
        }
        Command::MinIntake { scenario } => commands::intake::run(&context, &scenario)?,
        Command::Profile { action } => match action {
            ProfileCommand::Save { user, scenario } => {
                commands::profile::save(&context, user, &scenario)?;
            }
            ProfileCommand::Show { user } => commands::profile::show(&context, user)?,
            ProfileCommand::Delete { user } => commands::profile::delete(&context, user)?,
        },
    }

    Ok(())
}
