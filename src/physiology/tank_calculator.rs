// ABOUTME: Tank calculator converting a subject snapshot into muscle and liver glycogen reserves
// ABOUTME: Capacity with supercompensation headroom, filling state, and glucose-driven liver overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Tank Calculator
//!
//! Estimates how much glycogen an athlete can store and how much is currently
//! available, split between the muscles recruited by the sport and the liver.
//!
//! # Scientific References
//!
//! - Areta, J.L., & Hopkins, W.G. (2018). Skeletal muscle glycogen content at rest
//!   and during endurance exercise in humans: a meta-analysis.
//!   *Sports Medicine*, 48(9), 2091-2102. <https://doi.org/10.1007/s40279-018-0941-1>
//!
//! - Bergström, J., et al. (1967). Diet, muscle glycogen and physical performance.
//!   *Acta Physiologica Scandinavica*, 71(2), 140-150.

use glycogen_core::constants::{concentration, filling};
use glycogen_core::models::{HepaticFlag, Subject, TankState};
use tracing::warn;

use crate::config::{SimulationConfig, TankConfig};

/// Calculator for glycogen tank state
#[derive(Debug, Clone, Default)]
pub struct TankCalculator {
    config: TankConfig,
}

impl TankCalculator {
    /// Create a tank calculator with default tunables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tank calculator with custom tunables
    #[must_use]
    pub const fn with_config(config: TankConfig) -> Self {
        Self { config }
    }

    /// Tunables in use
    #[must_use]
    pub const fn config(&self) -> &TankConfig {
        &self.config
    }

    /// Compute the tank for a subject
    ///
    /// Out-of-range factors are clamped rather than rejected.
    #[must_use]
    pub fn calculate(&self, subject: &Subject) -> TankState {
        let cfg = &self.config;

        let active_muscle_kg = subject.total_muscle_kg() * subject.sport.active_fraction();
        let concentration = clamped_concentration(subject.glycogen_conc_g_kg);
        let base_muscle_glycogen = active_muscle_kg * concentration;

        let creatine = if subject.uses_creatine {
            cfg.creatine_multiplier
        } else {
            1.0
        };
        let max_capacity_g = (base_muscle_glycogen * cfg.supercompensation_headroom)
            .mul_add(creatine, cfg.liver_reserve_ceiling_g);

        let filling_factor = subject
            .filling_factor
            .clamp(filling::FILLING_MIN, filling::FILLING_MAX);
        let final_filling = filling_factor * subject.menstrual_phase.factor().min(1.0);
        let muscle_glycogen_g = (base_muscle_glycogen * creatine * final_filling)
            .min(active_muscle_kg * cfg.muscle_ceiling_g_per_kg);

        let (liver_factor, hepatic_flag) =
            self.liver_fill_factor(filling_factor, subject.glucose_mg_dl);
        let liver_glycogen_g = subject.liver_glycogen_g.max(0.0) * liver_factor;

        TankState {
            hepatic_flag,
            ..TankState::from_reserves(
                active_muscle_kg,
                max_capacity_g,
                muscle_glycogen_g,
                liver_glycogen_g,
            )
        }
    }

    /// Liver fill factor from the filling state and an optional glucose reading
    ///
    /// Glucose overrides only ever lower the factor.
    fn liver_fill_factor(
        &self,
        filling_factor: f64,
        glucose_mg_dl: Option<f64>,
    ) -> (f64, Option<HepaticFlag>) {
        let cfg = &self.config;
        let factor = if filling_factor <= cfg.depleted_filling_threshold {
            cfg.depleted_liver_factor
        } else {
            1.0
        };

        match glucose_mg_dl {
            Some(glucose) if glucose < cfg.hypoglycemia_mg_dl => {
                warn!(glucose, "Glucose below hypoglycemia threshold, hepatic criticality");
                (
                    factor.min(cfg.critical_liver_factor),
                    Some(HepaticFlag::Criticality),
                )
            }
            Some(glucose) if glucose <= cfg.low_normal_mg_dl => {
                warn!(glucose, "Glucose in low-normal band, hepatic reduction");
                (
                    factor.min(cfg.reduced_liver_factor),
                    Some(HepaticFlag::Reduction),
                )
            }
            _ => (factor, None),
        }
    }
}

fn clamped_concentration(value: f64) -> f64 {
    let clamped = value.clamp(concentration::MIN_G_PER_KG, concentration::MAX_G_PER_KG);
    if (clamped - value).abs() > f64::EPSILON {
        warn!(
            value,
            clamped, "Muscle glycogen concentration outside physiological range"
        );
    }
    clamped
}

/// Compute the tank for a subject with the global configuration
#[must_use]
pub fn calculate_tank(subject: &Subject) -> TankState {
    TankCalculator::with_config(SimulationConfig::global().tank.clone()).calculate(subject)
}
