// ABOUTME: Partitioning of carbohydrate demand across muscle, exogenous, and liver sources
// ABOUTME: Fixed priority with a nonlinear muscle share and a capped hepatic output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use crate::config::MetabolismConfig;

/// Grams drawn from each source in one minute
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Partition {
    /// From muscle glycogen
    pub muscle_g: f64,
    /// From exogenous carbohydrate
    pub exogenous_g: f64,
    /// From liver glycogen
    pub liver_g: f64,
    /// Demand nothing could cover
    pub unmet_g: f64,
}

/// Current reserves the partition draws on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reserves {
    /// Muscle glycogen now (g)
    pub muscle_g: f64,
    /// Muscle glycogen at the start (g)
    pub initial_muscle_g: f64,
    /// Liver glycogen now (g)
    pub liver_g: f64,
    /// Exogenous carbohydrate available this minute (g)
    pub exogenous_available_g: f64,
}

/// Muscle share of demand, `(m / m0)^k`, 0 once muscle is exhausted
#[must_use]
pub fn muscle_contribution_factor(muscle_g: f64, initial_muscle_g: f64, exponent: f64) -> f64 {
    if muscle_g <= 0.0 || initial_muscle_g <= 0.0 {
        return 0.0;
    }
    (muscle_g / initial_muscle_g).clamp(0.0, 1.0).powf(exponent)
}

/// Split carbohydrate demand: muscle share first, then exogenous, then liver up to its ceiling
#[must_use]
pub fn partition_demand(
    cho_demand_g: f64,
    reserves: &Reserves,
    config: &MetabolismConfig,
) -> Partition {
    let demand = cho_demand_g.max(0.0);
    let factor = muscle_contribution_factor(
        reserves.muscle_g,
        reserves.initial_muscle_g,
        config.muscle_contribution_exponent,
    );
    let muscle_g = (demand * factor).min(reserves.muscle_g.max(0.0));

    let blood_glucose_demand = demand - muscle_g;
    let exogenous_g = blood_glucose_demand.min(reserves.exogenous_available_g.max(0.0));

    let remaining = blood_glucose_demand - exogenous_g;
    let liver_g = if reserves.liver_g > 0.0 {
        remaining
            .min(config.liver_max_output_g_min)
            .min(reserves.liver_g)
    } else {
        0.0
    };

    Partition {
        muscle_g,
        exogenous_g,
        liver_g,
        unmet_g: remaining - liver_g,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserves(muscle: f64, liver: f64, exo: f64) -> Reserves {
        Reserves {
            muscle_g: muscle,
            initial_muscle_g: 400.0,
            liver_g: liver,
            exogenous_available_g: exo,
        }
    }

    #[test]
    fn test_full_muscle_covers_everything() {
        let config = MetabolismConfig::default();
        let split = partition_demand(3.0, &reserves(400.0, 100.0, 1.0), &config);
        assert!((split.muscle_g - 3.0).abs() < 1e-12);
        assert!(split.exogenous_g.abs() < f64::EPSILON);
        assert!(split.liver_g.abs() < f64::EPSILON);
    }

    #[test]
    fn test_liver_output_is_capped() {
        let config = MetabolismConfig::default();
        let split = partition_demand(4.0, &reserves(0.0, 100.0, 0.5), &config);
        assert!(split.muscle_g.abs() < f64::EPSILON);
        assert!((split.exogenous_g - 0.5).abs() < 1e-12);
        assert!((split.liver_g - 1.2).abs() < 1e-12);
        assert!((split.unmet_g - 2.3).abs() < 1e-12);
    }

    #[test]
    fn test_muscle_factor_follows_power_law() {
        let factor = muscle_contribution_factor(100.0, 400.0, 0.6);
        assert!(factor > 0.25);
        assert!((factor - 0.25_f64.powf(0.6)).abs() < 1e-12);
        assert!(muscle_contribution_factor(0.0, 400.0, 0.6).abs() < f64::EPSILON);
    }
}
