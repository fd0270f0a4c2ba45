// ABOUTME: Re-exports command modules for glycogen-cli
// ABOUTME: Holds the shared run context with output mode and profile store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

pub mod intake;
pub mod profile;
pub mod simulate;
pub mod tank;
pub mod taper;

use std::path::PathBuf;

use glycogen_tank::config::SimulationConfig;
use glycogen_tank::errors::AppResult;
use glycogen_tank::profile::JsonFileProfileStore;

/// State shared by every command
pub struct CliContext {
    /// Print JSON instead of tables
    pub json: bool,
    /// Profile store
    pub store: JsonFileProfileStore,
    /// Simulation tunables
    pub config: &'static SimulationConfig,
}

impl CliContext {
    /// Build the context, falling back to the platform data directory for the store
    pub fn new(json: bool, store_dir: Option<PathBuf>) -> AppResult<Self> {
        let store = match store_dir {
            Some(dir) => JsonFileProfileStore::new(dir),
            None => JsonFileProfileStore::default_location()?,
        };
        Ok(Self {
            json,
            store,
            config: SimulationConfig::global(),
        })
    }
}
