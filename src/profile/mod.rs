// ABOUTME: Athlete profile holding lifestyle inputs and deriving a clamped Subject snapshot
// ABOUTME: Concentration from training status, VO2max, or measurement; filling from diet, fatigue, sleep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Athlete Profile
//!
//! The collection layer between raw user inputs and the simulation engine.
//! Every factor is clamped here to its documented range before a
//! [`Subject`] is built.

/// Profile persistence boundary
pub mod store;

pub use store::{InMemoryProfileStore, JsonFileProfileStore, ProfileStore, StoredProfile};

use glycogen_core::constants::{concentration, filling, tank};
use glycogen_core::models::{
    glycogen_concentration_from_vo2max, DietType, FatigueState, MenstrualPhase, Sex, SleepQuality,
    Sport, Subject, TrainingStatus,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where the resting muscle glycogen concentration comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ConcentrationSource {
    /// Lookup by training status
    TrainingStatus {
        /// Training status
        status: TrainingStatus,
    },
    /// Linear estimate from `VO2max` (ml/kg/min)
    Vo2Max {
        /// Maximal oxygen uptake
        vo2max: f64,
    },
    /// Biopsy or ultrasound measurement (g/kg wet muscle)
    Measured {
        /// Measured concentration
        g_per_kg: f64,
    },
}

impl ConcentrationSource {
    /// Concentration in g/kg, clamped to 12-26
    #[must_use]
    pub fn concentration(&self) -> f64 {
        match *self {
            Self::TrainingStatus { status } => status.glycogen_concentration(),
            Self::Vo2Max { vo2max } => glycogen_concentration_from_vo2max(vo2max),
            Self::Measured { g_per_kg } => {
                g_per_kg.clamp(concentration::MIN_G_PER_KG, concentration::MAX_G_PER_KG)
            }
        }
    }
}

/// Lifestyle and anthropometric inputs of one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Body fat as a fraction
    pub body_fat_pct: f64,
    /// Biological sex
    pub sex: Sex,
    /// Sport discipline
    pub sport: Sport,
    /// Muscle glycogen concentration source
    pub concentration: ConcentrationSource,
    /// Diet of the last days
    pub diet: DietType,
    /// Accumulated fatigue
    pub fatigue: FatigueState,
    /// Recent sleep
    pub sleep: SleepQuality,
    /// Overnight fast before the session
    #[serde(default)]
    pub fasted: bool,
    /// Creatine supplementation
    #[serde(default)]
    pub uses_creatine: bool,
    /// Menstrual cycle phase
    #[serde(default)]
    pub menstrual_phase: MenstrualPhase,
    /// Acute blood glucose (mg/dL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glucose_mg_dl: Option<f64>,
    /// Measured skeletal muscle mass (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
}

impl AthleteProfile {
    /// Composite filling factor: diet x fatigue x sleep, clamped to 0-1.25
    #[must_use]
    pub fn filling_factor(&self) -> f64 {
        let diet = self.diet.factor().clamp(filling::DIET_MIN, filling::DIET_MAX);
        let fatigue = self
            .fatigue
            .factor()
            .clamp(filling::DEPLETION_MIN, filling::DEPLETION_MAX);
        (diet * fatigue * self.sleep.factor()).clamp(filling::FILLING_MIN, filling::FILLING_MAX)
    }

    /// Reference liver glycogen: reduced after an overnight fast
    #[must_use]
    pub const fn liver_glycogen_g(&self) -> f64 {
        if self.fasted {
            tank::FASTED_LIVER_GLYCOGEN_G
        } else {
            tank::LIVER_RESERVE_CEILING_G
        }
    }

    /// Build the subject snapshot, clamping out-of-range inputs
    #[must_use]
    pub fn to_subject(&self) -> Subject {
        let body_fat_pct = self.body_fat_pct.clamp(0.0, 1.0);
        if (body_fat_pct - self.body_fat_pct).abs() > f64::EPSILON {
            warn!(
                body_fat_pct = self.body_fat_pct,
                "Body fat outside 0-1, clamped"
            );
        }

        let menstrual_phase = match (self.sex, self.menstrual_phase) {
            (Sex::Male, phase) if phase != MenstrualPhase::None => {
                warn!("Menstrual phase ignored for male profile");
                MenstrualPhase::None
            }
            (_, phase) => phase,
        };

        Subject {
            weight_kg: self.weight_kg.max(0.0),
            height_cm: self.height_cm.max(0.0),
            body_fat_pct,
            sex: self.sex,
            glycogen_conc_g_kg: self.concentration.concentration(),
            sport: self.sport,
            liver_glycogen_g: self.liver_glycogen_g(),
            filling_factor: self.filling_factor(),
            uses_creatine: self.uses_creatine,
            menstrual_phase,
            glucose_mg_dl: self.glucose_mg_dl,
            muscle_mass_kg: self.muscle_mass_kg.filter(|kg| *kg > 0.0),
        }
    }
}
