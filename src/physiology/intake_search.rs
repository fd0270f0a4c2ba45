// ABOUTME: Minimum carbohydrate intake search over the metabolism simulator
// ABOUTME: Sweeps 0-120 g/h in 5 g/h steps and returns the lowest rate keeping both safety floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Minimum-Intake Search
//!
//! A candidate passes when the lowest liver reserve over the whole trace stays
//! above 5 g and the lowest muscle reserve stays above 20 g. The sweep assumes
//! more intake never hurts; it does not verify that assumption.
//!
//! Candidates may be evaluated on the rayon pool. `find_first` keeps the
//! smallest passing rate even when a larger one finishes first.

use glycogen_core::models::{
    ActivityParams, CarbMix, IntakeMode, IntakePlan, MetabolicCurve, Subject, TankState,
};
use rayon::prelude::*;
use tracing::debug;

use crate::config::{SearchConfig, SimulationConfig};
use crate::physiology::metabolism::{MetabolismSimulator, SimulationRequest};

/// Search for the lowest sustaining intake rate
#[derive(Debug, Clone, Default)]
pub struct IntakeSearch {
    config: SearchConfig,
    simulator: MetabolismSimulator,
}

impl IntakeSearch {
    /// Create a search with default tunables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search with custom tunables
    #[must_use]
    pub const fn with_config(config: SearchConfig, simulator: MetabolismSimulator) -> Self {
        Self { config, simulator }
    }

    /// Whether a request at `rate_g_h` keeps both reserves above their floors
    #[must_use]
    pub fn passes(&self, request: &SimulationRequest<'_>, rate_g_h: u32) -> bool {
        let candidate = request.with_intake_rate(f64::from(rate_g_h));
        let result = self.simulator.simulate(&candidate);
        result.trace.min_liver_g() > self.config.min_liver_floor_g
            && result.trace.min_muscle_g() > self.config.min_muscle_floor_g
    }

    /// Lowest candidate rate (g/h) that passes, `None` when even the highest fails
    ///
    /// The request's own intake rate is ignored; every other intake setting is kept.
    #[must_use]
    pub fn minimum_intake(&self, request: &SimulationRequest<'_>) -> Option<u32> {
        let candidates = self.config.candidates();
        let found = if self.config.parallel {
            candidates
                .into_par_iter()
                .find_first(|&rate| self.passes(request, rate))
        } else {
            candidates
                .into_iter()
                .find(|&rate| self.passes(request, rate))
        };

        debug!(
            duration_min = request.duration_min,
            parallel = self.config.parallel,
            minimum_g_h = ?found,
            "Minimum intake search complete"
        );
        found
    }
}

/// Lowest sustaining intake rate with the global configuration
///
/// Returns `None` when no rate up to the maximum candidate keeps the liver
/// above 5 g and the muscles above 20 g.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn minimum_intake(
    tank: &TankState,
    duration_min: u32,
    subject: &Subject,
    activity: &ActivityParams,
    metabolic_curve: Option<&MetabolicCurve>,
    mix: CarbMix,
    mode: IntakeMode,
    cutoff_min: u32,
) -> Option<u32> {
    let config = SimulationConfig::global();
    let intake = IntakePlan::default()
        .with_mix(mix)
        .with_mode(mode)
        .with_cutoff(cutoff_min);
    let mut request =
        SimulationRequest::new(tank, subject, activity, duration_min).with_intake(intake);
    if let Some(curve) = metabolic_curve {
        request = request.with_metabolic_curve(curve);
    }

    IntakeSearch::with_config(
        config.search.clone(),
        MetabolismSimulator::with_config(config.metabolism.clone()),
    )
    .minimum_intake(&request)
}
