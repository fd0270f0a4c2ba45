// ABOUTME: Minimum-intake search configuration
// ABOUTME: Candidate sweep range, step, safety floors, and parallel evaluation switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_core::constants::search;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Minimum-intake search tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Highest candidate rate (g/h)
    pub max_intake_g_h: u32,
    /// Candidate spacing (g/h)
    pub step_g_h: u32,
    /// Minimum liver reserve a passing candidate keeps above (g)
    pub min_liver_floor_g: f64,
    /// Minimum muscle reserve a passing candidate keeps above (g)
    pub min_muscle_floor_g: f64,
    /// Evaluate candidates on the rayon pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_intake_g_h: search::MAX_INTAKE_G_H,
            step_g_h: search::STEP_G_H,
            min_liver_floor_g: search::MIN_LIVER_FLOOR_G,
            min_muscle_floor_g: search::MIN_MUSCLE_FLOOR_G,
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Candidate rates in increasing order
    #[must_use]
    pub fn candidates(&self) -> Vec<u32> {
        let step = self.step_g_h.max(1) as usize;
        (0..=self.max_intake_g_h).step_by(step).collect()
    }

    /// Validate search tunables
    ///
    /// # Errors
    ///
    /// Returns an error if the step is zero or a floor is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_g_h == 0 {
            return Err(ConfigError::ValueOutOfRange("step_g_h must be positive"));
        }
        if self.min_liver_floor_g < 0.0 || self.min_muscle_floor_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "search floors must be non-negative",
            ));
        }
        Ok(())
    }
}
