// ABOUTME: Athlete snapshot consumed by the tank calculator and simulators
// ABOUTME: Anthropometrics, glycogen concentration, filling state, and acute biomarkers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use serde::{Deserialize, Serialize};

use super::factors::{MenstrualPhase, Sex, Sport};
use crate::constants::{concentration, tank};

/// Immutable snapshot of one athlete at one point in time
///
/// Built by the profile layer from lifestyle inputs; every factor is expected
/// to be clamped already, and the tank calculator clamps again defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Body fat as a fraction in [0, 1]
    pub body_fat_pct: f64,
    /// Biological sex
    pub sex: Sex,
    /// Resting muscle glycogen concentration (g/kg wet muscle)
    pub glycogen_conc_g_kg: f64,
    /// Sport discipline
    pub sport: Sport,
    /// Reference liver glycogen capacity (g)
    pub liver_glycogen_g: f64,
    /// Composite diet x fatigue x sleep multiplier in [0, 1.25]
    pub filling_factor: f64,
    /// Creatine supplementation (+10% storage)
    #[serde(default)]
    pub uses_creatine: bool,
    /// Menstrual cycle phase
    #[serde(default)]
    pub menstrual_phase: MenstrualPhase,
    /// Acute blood glucose (mg/dL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glucose_mg_dl: Option<f64>,
    /// Measured skeletal muscle mass (kg), overrides the lean-mass estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
}

impl Subject {
    /// Lean body mass (kg)
    #[must_use]
    pub fn lean_body_mass(&self) -> f64 {
        self.weight_kg.max(0.0) * (1.0 - self.body_fat_pct.clamp(0.0, 1.0))
    }

    /// Skeletal muscle share of lean mass, including the trained bonus
    #[must_use]
    pub fn muscle_fraction(&self) -> f64 {
        let base = self.sex.muscle_fraction();
        if self.glycogen_conc_g_kg >= tank::TRAINED_CONCENTRATION_THRESHOLD {
            base + tank::TRAINED_MUSCLE_FRACTION_BONUS
        } else {
            base
        }
    }

    /// Total skeletal muscle mass (kg), measured when available
    #[must_use]
    pub fn total_muscle_kg(&self) -> f64 {
        match self.muscle_mass_kg {
            Some(measured) if measured > 0.0 => measured,
            _ => self.lean_body_mass() * self.muscle_fraction(),
        }
    }
}

/// Estimate resting muscle glycogen concentration from `VO2max`
///
/// Formula: `clamp(13.0 + (vo2max - 30) * 0.24, 12.0, 26.0)` g/kg
#[must_use]
pub fn glycogen_concentration_from_vo2max(vo2max: f64) -> f64 {
    concentration::VO2MAX_SLOPE
        .mul_add(
            vo2max - concentration::VO2MAX_REFERENCE,
            concentration::VO2MAX_INTERCEPT_G_PER_KG,
        )
        .clamp(concentration::MIN_G_PER_KG, concentration::MAX_G_PER_KG)
}
