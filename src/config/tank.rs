// ABOUTME: Tank calculator configuration for storage capacity and liver fill rules
// ABOUTME: Supercompensation headroom, creatine bonus, muscle ceiling, and glucose thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Tank Calculator Configuration
//!
//! # Scientific References
//!
//! - Muscle glycogen ceiling: Areta & Hopkins (2018) DOI: 10.1007/s40279-018-0941-1
//! - Creatine and glycogen: Roberts et al. (2016) DOI: 10.1007/s00726-016-2193-0

use glycogen_core::constants::{glucose, tank};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Tank calculator tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankConfig {
    /// Liver reserve ceiling added to the muscle capacity (g)
    pub liver_reserve_ceiling_g: f64,
    /// Supercompensation headroom over resting muscle glycogen (1.25)
    pub supercompensation_headroom: f64,
    /// Storage multiplier under creatine supplementation (1.10)
    pub creatine_multiplier: f64,
    /// Absolute muscle glycogen ceiling (g per kg active muscle)
    pub muscle_ceiling_g_per_kg: f64,
    /// Filling factor at or below which the liver is considered depleted
    pub depleted_filling_threshold: f64,
    /// Liver fill factor applied when depleted
    pub depleted_liver_factor: f64,
    /// Glucose below which the liver is critical (mg/dL)
    pub hypoglycemia_mg_dl: f64,
    /// Glucose below which the liver is reduced (mg/dL)
    pub low_normal_mg_dl: f64,
    /// Liver fill factor under hypoglycemia
    pub critical_liver_factor: f64,
    /// Liver fill factor cap in the low-normal band
    pub reduced_liver_factor: f64,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            liver_reserve_ceiling_g: tank::LIVER_RESERVE_CEILING_G,
            supercompensation_headroom: tank::SUPERCOMPENSATION_HEADROOM,
            creatine_multiplier: tank::CREATINE_MULTIPLIER,
            muscle_ceiling_g_per_kg: tank::MUSCLE_GLYCOGEN_CEILING_G_PER_KG,
            depleted_filling_threshold: tank::DEPLETED_FILLING_THRESHOLD,
            depleted_liver_factor: tank::DEPLETED_LIVER_FACTOR,
            hypoglycemia_mg_dl: glucose::HYPOGLYCEMIA_MG_DL,
            low_normal_mg_dl: glucose::LOW_NORMAL_MG_DL,
            critical_liver_factor: glucose::CRITICAL_LIVER_FACTOR,
            reduced_liver_factor: glucose::REDUCED_LIVER_FACTOR,
        }
    }
}

impl TankConfig {
    /// Validate tank tunables
    ///
    /// # Errors
    ///
    /// Returns an error if a multiplier or threshold is outside its physiological range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.liver_reserve_ceiling_g <= 0.0 || self.muscle_ceiling_g_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "liver reserve and muscle ceiling must be positive",
            ));
        }
        if self.supercompensation_headroom < 1.0 || self.creatine_multiplier < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "supercompensation headroom and creatine multiplier must be >= 1.0",
            ));
        }
        let factors = [
            self.depleted_liver_factor,
            self.critical_liver_factor,
            self.reduced_liver_factor,
        ];
        if factors.iter().any(|f| !(0.0..=1.0).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "liver fill factors must be between 0.0 and 1.0",
            ));
        }
        if self.hypoglycemia_mg_dl >= self.low_normal_mg_dl {
            return Err(ConfigError::InvalidRange(
                "hypoglycemia threshold must be < low-normal threshold",
            ));
        }
        Ok(())
    }
}
