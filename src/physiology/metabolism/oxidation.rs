// ABOUTME: Exogenous carbohydrate oxidation with first-order absorption lag
// ABOUTME: Gut buffer accounting and oxidation capped by what has been ingested
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_core::models::IntakePlan;

/// Exogenous oxidation state carried from minute to minute
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GutState {
    /// Smoothed oxidation rate (g/min)
    pub oxidation_rate_g_min: f64,
    /// Ingested carbohydrate not yet oxidized (g)
    pub buffer_g: f64,
}

/// Smoothing coefficient `1 - exp(-1 / tau)`; a non-positive tau means no lag
#[must_use]
pub fn absorption_alpha(tau_min: f64) -> f64 {
    if tau_min > 0.0 {
        1.0 - (-1.0 / tau_min).exp()
    } else {
        1.0
    }
}

/// Oxidation target for a plan: `min(rate, ceiling) * efficiency`, 0 without intake
#[must_use]
pub fn oxidation_target(plan: &IntakePlan) -> f64 {
    if plan.rate_g_h <= 0.0 {
        return 0.0;
    }
    (plan.rate_g_h / 60.0).min(plan.max_exo_g_min()) * plan.oxidation_efficiency.clamp(0.0, 1.0)
}

/// Advance the smoothed rate one minute and return the grams available to oxidize
///
/// Availability never exceeds the gut buffer.
#[must_use]
pub fn compute_oxidation(state: &mut GutState, target_g_min: f64, alpha: f64) -> f64 {
    state.oxidation_rate_g_min = alpha
        .mul_add(target_g_min - state.oxidation_rate_g_min, state.oxidation_rate_g_min)
        .max(0.0);
    state.oxidation_rate_g_min.min(state.buffer_g).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_approaches_target() {
        let alpha = absorption_alpha(20.0);
        let mut state = GutState {
            oxidation_rate_g_min: 0.0,
            buffer_g: 1_000.0,
        };
        let mut previous = 0.0;
        for _ in 0..200 {
            let available = compute_oxidation(&mut state, 1.0, alpha);
            assert!(available >= previous);
            previous = available;
        }
        assert!((state.oxidation_rate_g_min - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_availability_capped_by_gut() {
        let mut state = GutState {
            oxidation_rate_g_min: 1.0,
            buffer_g: 0.25,
        };
        let available = compute_oxidation(&mut state, 1.0, 0.5);
        assert!((available - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_lag_when_tau_not_positive() {
        assert!((absorption_alpha(0.0) - 1.0).abs() < f64::EPSILON);
    }
}
