// ABOUTME: In-activity carbohydrate feeding plan
// ABOUTME: Rate, serving size, delivery mode, feeding cutoff, blend, and absorption parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use serde::{Deserialize, Serialize};

use super::factors::CarbMix;
use crate::constants::metabolism;

/// How carbohydrate is delivered during the activity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeMode {
    /// Fixed-size servings at a regular interval, first one at minute 0
    #[default]
    Discrete,
    /// Constant trickle (drink mix sipped continuously)
    Continuous,
}

/// Carbohydrate feeding plan for one activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakePlan {
    /// Target intake rate (g/h)
    pub rate_g_h: f64,
    /// Serving size for discrete delivery (g)
    pub unit_g: f64,
    /// Delivery mode
    pub mode: IntakeMode,
    /// Minutes before the end during which nothing is ingested
    pub cutoff_min: u32,
    /// Carbohydrate blend
    pub mix: CarbMix,
    /// Explicit exogenous oxidation ceiling (g/h), replacing the blend's ceiling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_exo_override_g_h: Option<f64>,
    /// Fraction of absorbed carbohydrate that ends up oxidized
    pub oxidation_efficiency: f64,
    /// Absorption time constant (min)
    pub absorption_tau_min: f64,
}

impl Default for IntakePlan {
    fn default() -> Self {
        Self {
            rate_g_h: 0.0,
            unit_g: metabolism::DEFAULT_INTAKE_UNIT_G,
            mode: IntakeMode::Discrete,
            cutoff_min: 0,
            mix: CarbMix::GlucoseOnly,
            max_exo_override_g_h: None,
            oxidation_efficiency: metabolism::DEFAULT_OXIDATION_EFFICIENCY,
            absorption_tau_min: metabolism::DEFAULT_ABSORPTION_TAU_MIN,
        }
    }
}

impl IntakePlan {
    /// Plan at the given rate with default serving and absorption parameters
    #[must_use]
    pub fn at_rate(rate_g_h: f64) -> Self {
        Self {
            rate_g_h,
            ..Self::default()
        }
    }

    /// Same plan at another rate
    #[must_use]
    pub const fn with_rate(mut self, rate_g_h: f64) -> Self {
        self.rate_g_h = rate_g_h;
        self
    }

    /// Set the delivery mode
    #[must_use]
    pub const fn with_mode(mut self, mode: IntakeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the carbohydrate blend
    #[must_use]
    pub const fn with_mix(mut self, mix: CarbMix) -> Self {
        self.mix = mix;
        self
    }

    /// Set the feeding cutoff window
    #[must_use]
    pub const fn with_cutoff(mut self, cutoff_min: u32) -> Self {
        self.cutoff_min = cutoff_min;
        self
    }

    /// Exogenous oxidation ceiling (g/min)
    #[must_use]
    pub fn max_exo_g_min(&self) -> f64 {
        self.max_exo_override_g_h
            .unwrap_or_else(|| self.mix.max_oxidation_g_h())
            .max(0.0)
            / 60.0
    }
}
