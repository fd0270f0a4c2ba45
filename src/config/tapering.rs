// ABOUTME: Tapering engine configuration for daily glycogen balance
// ABOUTME: Resting liver drain, NEAT carbohydrate use, training cost, and liver/muscle split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_core::constants::tapering;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Tapering engine tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaperingConfig {
    /// Resting hepatic glucose drain (g/h)
    pub liver_drain_g_per_hour: f64,
    /// Non-exercise carbohydrate use (g per kg per day)
    pub neat_cho_g_per_kg: f64,
    /// Training cost of one hour at intensity factor 1.0 (kcal)
    pub activity_kcal_per_hour: f64,
    /// Liver share of a positive balance
    pub replenish_liver_share: f64,
    /// Liver share of a negative balance
    pub deplete_liver_share: f64,
}

impl Default for TaperingConfig {
    fn default() -> Self {
        Self {
            liver_drain_g_per_hour: tapering::LIVER_DRAIN_G_PER_HOUR,
            neat_cho_g_per_kg: tapering::NEAT_CHO_G_PER_KG,
            activity_kcal_per_hour: tapering::ACTIVITY_KCAL_PER_HOUR,
            replenish_liver_share: tapering::REPLENISH_LIVER_SHARE,
            deplete_liver_share: tapering::DEPLETE_LIVER_SHARE,
        }
    }
}

impl TaperingConfig {
    /// Validate tapering tunables
    ///
    /// # Errors
    ///
    /// Returns an error if a drain is negative or a share is outside [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.liver_drain_g_per_hour < 0.0
            || self.neat_cho_g_per_kg < 0.0
            || self.activity_kcal_per_hour < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "daily drains must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.replenish_liver_share)
            || !(0.0..=1.0).contains(&self.deplete_liver_share)
        {
            return Err(ConfigError::InvalidShares(
                "liver shares must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}
