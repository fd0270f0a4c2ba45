// ABOUTME: RER and substrate partitioning from an effective intensity factor
// ABOUTME: Calibrated polynomial RER curve, carbohydrate/fat ratios, and crossover-point bias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! RER / Substrate Partitioner
//!
//! The respiratory exchange ratio rises with relative intensity from 0.70
//! (pure fat) towards 1.0 (pure carbohydrate). A user-reported crossover point
//! shifts the intensity fed to the curve without changing the raw intensity.
//!
//! # Scientific References
//!
//! - Brooks, G.A., & Mercier, J. (1994). Balance of carbohydrate and lipid
//!   utilization during exercise: the "crossover" concept.
//!   *Journal of Applied Physiology*, 76(6), 2253-2261.
//!   <https://doi.org/10.1152/jappl.1994.76.6.2253>

use glycogen_core::constants::substrate::{
    CHO_RATIO_SLOPE, MIN_EFFECTIVE_INTENSITY, RER_MAX, RER_MIN, RER_POLYNOMIAL,
};
use serde::{Deserialize, Serialize};

/// Fuel mix at one intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubstrateSplit {
    /// Respiratory exchange ratio
    pub rer: f64,
    /// Carbohydrate share of energy, 0-1
    pub cho_ratio: f64,
    /// Fat share of energy, 0-1
    pub fat_ratio: f64,
}

impl SubstrateSplit {
    /// Split at an effective intensity factor
    #[must_use]
    pub fn at_intensity(effective_if: f64) -> Self {
        Self::from_rer(rer(effective_if))
    }

    /// Split implied by an RER value
    #[must_use]
    pub fn from_rer(rer: f64) -> Self {
        let cho_ratio = cho_ratio(rer);
        Self {
            rer,
            cho_ratio,
            fat_ratio: 1.0 - cho_ratio,
        }
    }

    /// Split implied by a carbohydrate energy share
    #[must_use]
    pub fn from_cho_ratio(cho_ratio: f64) -> Self {
        let cho_ratio = cho_ratio.clamp(0.0, 1.0);
        Self {
            rer: rer_from_cho_ratio(cho_ratio),
            cho_ratio,
            fat_ratio: 1.0 - cho_ratio,
        }
    }
}

/// Respiratory exchange ratio at an effective intensity factor, in [0.70, 1.15]
#[must_use]
pub fn rer(effective_if: f64) -> f64 {
    let x = if effective_if.is_finite() {
        effective_if.max(0.0)
    } else {
        MIN_EFFECTIVE_INTENSITY
    };
    RER_POLYNOMIAL
        .iter()
        .rev()
        .fold(0.0_f64, |acc, &coef| acc.mul_add(x, coef))
        .clamp(RER_MIN, RER_MAX)
}

/// Carbohydrate share of energy for an RER value, in [0, 1]
#[must_use]
pub fn cho_ratio(rer: f64) -> f64 {
    ((rer - RER_MIN) * CHO_RATIO_SLOPE).clamp(0.0, 1.0)
}

/// Fat share of energy for an RER value
#[must_use]
pub fn fat_ratio(rer: f64) -> f64 {
    1.0 - cho_ratio(rer)
}

/// RER implied by a carbohydrate energy share
#[must_use]
pub fn rer_from_cho_ratio(cho_ratio: f64) -> f64 {
    (RER_MIN + cho_ratio.clamp(0.0, 1.0) / CHO_RATIO_SLOPE).clamp(RER_MIN, RER_MAX)
}

/// Intensity factor shifted by the user's crossover point, floored at 0.3
///
/// A crossover below the population standard means carbohydrate dominates
/// earlier, so the effective intensity is pushed up.
#[must_use]
pub fn effective_intensity(
    raw_if: f64,
    user_crossover_pct: f64,
    standard_crossover_pct: f64,
) -> f64 {
    (raw_if + (standard_crossover_pct - user_crossover_pct) / 100.0).max(MIN_EFFECTIVE_INTENSITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossover_is_near_even_split() {
        let split = SubstrateSplit::at_intensity(0.70);
        assert!((split.cho_ratio - 0.5).abs() < 0.01);
        assert!((split.cho_ratio + split.fat_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_effective_intensity_shift() {
        assert!((effective_intensity(0.70, 60.0, 70.0) - 0.80).abs() < 1e-12);
        assert!((effective_intensity(0.70, 80.0, 70.0) - 0.60).abs() < 1e-12);
        assert!((effective_intensity(0.10, 90.0, 70.0) - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cho_ratio_round_trip_through_rer() {
        let split = SubstrateSplit::from_cho_ratio(0.658);
        assert!((cho_ratio(split.rer) - 0.658).abs() < 1e-9);
    }
}
