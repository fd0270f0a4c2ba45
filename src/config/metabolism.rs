// ABOUTME: Metabolism simulator configuration for fatigue drift and substrate partitioning
// ABOUTME: Efficiency loss, heart rate drift, muscle contribution exponent, liver output, status thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Metabolism Simulator Configuration
//!
//! The muscle contribution exponent and the liver output ceiling are empirical
//! tuning values. They live here so they can be recalibrated without touching
//! the simulation logic.
//!
//! # Scientific References
//!
//! - Hepatic glucose output: Coggan & Coyle (1991) DOI: 10.1249/00003677-199100190-00003
//! - Cardiovascular drift: Coyle & Gonzalez-Alonso (2001) DOI: 10.1097/00003677-200101000-00019

use glycogen_core::constants::{metabolism, status, substrate};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Metabolism simulator tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetabolismConfig {
    /// Minute after which fatigue drift starts
    pub fatigue_onset_min: u32,
    /// Gross efficiency lost per minute past onset (power mode)
    pub efficiency_loss_per_min: f64,
    /// Gross efficiency floor (power mode)
    pub min_efficiency: f64,
    /// Demand drift per minute past onset (heart rate mode)
    pub hr_drift_per_min: f64,
    /// Exponent of the muscle contribution factor `(m / m0)^k`
    pub muscle_contribution_exponent: f64,
    /// Maximum hepatic glucose output (g/min)
    pub liver_max_output_g_min: f64,
    /// Liver reserve below which the status is critical (g)
    pub critical_liver_g: f64,
    /// Muscle reserve below which the status warns (g)
    pub warning_muscle_g: f64,
    /// Population crossover point (% of threshold)
    pub standard_crossover_pct: f64,
    /// Running expenditure at threshold when no kcal/h is given (kcal per kg per hour)
    pub running_kcal_per_kg_hour: f64,
}

impl Default for MetabolismConfig {
    fn default() -> Self {
        Self {
            fatigue_onset_min: metabolism::FATIGUE_ONSET_MIN,
            efficiency_loss_per_min: metabolism::EFFICIENCY_LOSS_PER_MIN,
            min_efficiency: metabolism::MIN_EFFICIENCY,
            hr_drift_per_min: metabolism::HR_DRIFT_PER_MIN,
            muscle_contribution_exponent: metabolism::MUSCLE_CONTRIBUTION_EXPONENT,
            liver_max_output_g_min: metabolism::LIVER_MAX_OUTPUT_G_MIN,
            critical_liver_g: status::CRITICAL_LIVER_G,
            warning_muscle_g: status::WARNING_MUSCLE_G,
            standard_crossover_pct: substrate::STANDARD_CROSSOVER_PCT,
            running_kcal_per_kg_hour: metabolism::RUNNING_KCAL_PER_KG_HOUR_AT_THRESHOLD,
        }
    }
}

impl MetabolismConfig {
    /// Validate simulator tunables
    ///
    /// # Errors
    ///
    /// Returns an error if a rate, exponent or threshold is outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.05..=0.40).contains(&self.min_efficiency) {
            return Err(ConfigError::ValueOutOfRange(
                "min_efficiency must be between 0.05 and 0.40",
            ));
        }
        if self.efficiency_loss_per_min < 0.0 || self.hr_drift_per_min < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "drift rates must be non-negative",
            ));
        }
        if self.muscle_contribution_exponent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "muscle_contribution_exponent must be positive",
            ));
        }
        if self.liver_max_output_g_min <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "liver_max_output_g_min must be positive",
            ));
        }
        if self.critical_liver_g < 0.0 || self.warning_muscle_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "status thresholds must be non-negative",
            ));
        }
        if !(0.0..=100.0).contains(&self.standard_crossover_pct) {
            return Err(ConfigError::ValueOutOfRange(
                "standard_crossover_pct must be between 0 and 100",
            ));
        }
        if self.running_kcal_per_kg_hour <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "running_kcal_per_kg_hour must be positive",
            ));
        }
        Ok(())
    }
}
