// ABOUTME: Simulation configuration grouping tank, metabolism, tapering, and search tunables
// ABOUTME: Loads defaults from physiological constants, applies GLYCOGEN_* env overrides, validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Simulation Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `tank` - Storage capacity and liver fill rules
//! - `metabolism` - Fatigue drift, substrate partitioning and status thresholds
//! - `tapering` - Daily glycogen balance for the lead-in to an event
//! - `search` - Minimum-intake sweep range and safety floors
//!
//! Every value defaults to its named constant in `glycogen_core::constants`
//! and can be overridden through a `GLYCOGEN_*` environment variable.

pub mod error;
pub mod metabolism;
pub mod search;
pub mod tank;
pub mod tapering;

pub use error::ConfigError;
pub use metabolism::MetabolismConfig;
pub use search::SearchConfig;
pub use tank::TankConfig;
pub use tapering::TaperingConfig;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static SIMULATION_CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Main simulation configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Tank calculator tunables
    pub tank: TankConfig,
    /// Metabolism simulator tunables
    pub metabolism: MetabolismConfig,
    /// Tapering engine tunables
    pub tapering: TaperingConfig,
    /// Minimum-intake search tunables
    pub search: SearchConfig,
}

impl SimulationConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SIMULATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load simulation config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tank.validate()?;
        self.metabolism.validate()?;
        self.tapering.validate()?;
        self.search.validate()
    }

    /// Apply environment variable override for a single config value
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Tank overrides
        Self::apply_env_var(
            "GLYCOGEN_TANK_LIVER_CEILING_G",
            &mut self.tank.liver_reserve_ceiling_g,
        )?;
        Self::apply_env_var(
            "GLYCOGEN_TANK_SUPERCOMPENSATION",
            &mut self.tank.supercompensation_headroom,
        )?;
        Self::apply_env_var(
            "GLYCOGEN_TANK_CREATINE_MULTIPLIER",
            &mut self.tank.creatine_multiplier,
        )?;
        Self::apply_env_var(
            "GLYCOGEN_TANK_MUSCLE_CEILING_G_PER_KG",
            &mut self.tank.muscle_ceiling_g_per_kg,
        )?;

        // Metabolism overrides
        Self::apply_env_var(
            "GLYCOGEN_METABOLISM_FATIGUE_ONSET_MIN",
            &mut self.metabolism.fatigue_onset_min,
        )?;
        Self::apply_env_var(
            "GLYCOGEN_METABOLISM_EFFICIENCY_LOSS",
            &mut self.metabolism.efficiency_loss_per_min,
        )?;
        Self::apply_env_var(
            "GLYCOGEN_METABOLISM_HR_DRIFT",
            &mut self.metabolism.hr_drift_per_min,
        )?;
        Self::apply_env_var(
            "GLYCOGEN_METABOLISM_MUSCLE_EXPONENT",
            &mut self.metabolism.muscle_contribution_exponent,
        )?;
        Self::apply_env_var(
            "GLYCOGEN_METABOLISM_LIVER_MAX_OUTPUT",
            &mut self.metabolism.liver_max_output_g_min,
        )?;

        // Tapering overrides
        Self::apply_env_var(
            "GLYCOGEN_TAPERING_LIVER_DRAIN",
            &mut self.tapering.liver_drain_g_per_hour,
        )?;
        Self::apply_env_var(
            "GLYCOGEN_TAPERING_NEAT_G_PER_KG",
            &mut self.tapering.neat_cho_g_per_kg,
        )?;

        // Search overrides
        Self::apply_env_var(
            "GLYCOGEN_SEARCH_MAX_INTAKE",
            &mut self.search.max_intake_g_h,
        )?;
        Self::apply_env_var("GLYCOGEN_SEARCH_STEP", &mut self.search.step_g_h)?;
        Self::apply_env_var("GLYCOGEN_SEARCH_PARALLEL", &mut self.search.parallel)?;

        Ok(self)
    }
}
