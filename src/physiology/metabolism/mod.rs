// ABOUTME: Minute-by-minute metabolism simulator over muscle, liver, gut, and fat
// ABOUTME: Composes demand, intake, oxidation, partition, and store update sub-steps per minute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Metabolism Simulator
//!
//! Steps an activity one integer minute at a time, from minute 0 to the
//! duration inclusive. Each minute:
//!
//! 1. `compute_demand` - energy and substrate demand at that minute's effort
//! 2. `compute_intake` - carbohydrate ingested into the gut buffer
//! 3. `compute_oxidation` - lagged exogenous oxidation, capped by the gut buffer
//! 4. `partition_demand` - muscle share, then exogenous, then liver
//! 5. `update_stores` - reserves decremented from minute 1 onwards, floored at 0
//!
//! Running out of glycogen never stops the run; it shows up in the status labels.
//!
//! # Scientific References
//!
//! - Jeukendrup, A.E. (2014). A step towards personalized sports nutrition:
//!   carbohydrate intake during exercise. *Sports Medicine*, 44(S1), 25-33.
//!   <https://doi.org/10.1007/s40279-014-0148-z>

/// Per-minute energy and substrate demand
pub mod demand;
/// Ingestion schedule
pub mod intake;
/// Lagged exogenous oxidation
pub mod oxidation;
/// Source priority partition
pub mod partition;

use glycogen_core::constants::substrate::STANDARD_CROSSOVER_PCT;
use glycogen_core::models::{
    ActivityParams, GlycogenStatus, IntakePlan, MetabolicCurve, SimulationStats, SimulationTrace,
    Subject, TankState, TracePoint,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{MetabolismConfig, SimulationConfig};

pub use demand::{DemandModel, MinuteDemand};
pub use intake::IntakeSchedule;
pub use oxidation::{absorption_alpha, compute_oxidation, oxidation_target, GutState};
pub use partition::{muscle_contribution_factor, partition_demand, Partition, Reserves};

/// Everything one simulation run needs
///
/// Borrowed inputs are never mutated; each run owns its working counters.
#[derive(Debug, Clone, Copy)]
pub struct SimulationRequest<'a> {
    /// Starting reserves
    pub tank: &'a TankState,
    /// Athlete snapshot
    pub subject: &'a Subject,
    /// Activity description
    pub activity: &'a ActivityParams,
    /// Activity length (min)
    pub duration_min: u32,
    /// Feeding plan
    pub intake: IntakePlan,
    /// User crossover point (% of threshold)
    pub crossover_pct: f64,
    /// Per-minute effort in sport units, index = minute
    pub intensity_series: Option<&'a [f64]>,
    /// Lab metabolic curve
    pub metabolic_curve: Option<&'a MetabolicCurve>,
}

impl<'a> SimulationRequest<'a> {
    /// Request with no intake, the standard crossover point and a constant average effort
    #[must_use]
    pub fn new(
        tank: &'a TankState,
        subject: &'a Subject,
        activity: &'a ActivityParams,
        duration_min: u32,
    ) -> Self {
        Self {
            tank,
            subject,
            activity,
            duration_min,
            intake: IntakePlan::at_rate(0.0),
            crossover_pct: STANDARD_CROSSOVER_PCT,
            intensity_series: None,
            metabolic_curve: None,
        }
    }

    /// Set the feeding plan
    #[must_use]
    pub const fn with_intake(mut self, intake: IntakePlan) -> Self {
        self.intake = intake;
        self
    }

    /// Same request at another intake rate (g/h)
    #[must_use]
    pub const fn with_intake_rate(mut self, rate_g_h: f64) -> Self {
        self.intake = self.intake.with_rate(rate_g_h);
        self
    }

    /// Set the user crossover point
    #[must_use]
    pub const fn with_crossover(mut self, crossover_pct: f64) -> Self {
        self.crossover_pct = crossover_pct;
        self
    }

    /// Drive effort from a per-minute series
    #[must_use]
    pub const fn with_intensity_series(mut self, series: &'a [f64]) -> Self {
        self.intensity_series = Some(series);
        self
    }

    /// Take substrate rates from a lab curve
    #[must_use]
    pub const fn with_metabolic_curve(mut self, curve: &'a MetabolicCurve) -> Self {
        self.metabolic_curve = Some(curve);
        self
    }

    /// Effort at a minute: the series value, its last value past the end, else the average
    #[must_use]
    pub fn intensity_at(&self, minute: u32) -> f64 {
        self.intensity_series
            .and_then(|series| series.get(minute as usize).or_else(|| series.last()))
            .copied()
            .filter(|value| value.is_finite())
            .unwrap_or_else(|| self.activity.average_intensity())
    }
}

/// Trace and summary of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Minute-ordered trace
    pub trace: SimulationTrace,
    /// End-of-activity summary
    pub stats: SimulationStats,
}

/// Reserves carried between minutes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StoreState {
    /// Muscle glycogen (g)
    pub muscle_g: f64,
    /// Liver glycogen (g)
    pub liver_g: f64,
    /// Gut buffer and smoothed exogenous oxidation
    pub gut: GutState,
}

/// Subtract one minute's draw from the stores, flooring each at zero
pub fn update_stores(stores: &mut StoreState, partition: &Partition) {
    stores.muscle_g = (stores.muscle_g - partition.muscle_g).max(0.0);
    stores.liver_g = (stores.liver_g - partition.liver_g).max(0.0);
    stores.gut.buffer_g = (stores.gut.buffer_g - partition.exogenous_g).max(0.0);
}

/// Run-constant inputs shared by every minute
struct RunContext<'r, 'a> {
    request: &'r SimulationRequest<'a>,
    demand: DemandModel<'r>,
    schedule: IntakeSchedule,
    oxidation_target_g_min: f64,
    alpha: f64,
    initial_muscle_g: f64,
}

/// Running sums for the summary
#[derive(Debug, Default)]
struct RunTotals {
    muscle_g: f64,
    liver_g: f64,
    exogenous_g: f64,
    fat_g: f64,
    kcal: f64,
    unmet_g: f64,
    intake_g: f64,
    intensity_factor_sum: f64,
    rer_sum: f64,
}

impl RunTotals {
    fn record(&mut self, minute: u32, demand: &MinuteDemand, partition: &Partition) {
        self.intensity_factor_sum += demand.intensity_factor;
        self.rer_sum += demand.split.rer;
        if minute == 0 {
            return;
        }
        self.muscle_g += partition.muscle_g;
        self.liver_g += partition.liver_g;
        self.exogenous_g += partition.exogenous_g;
        self.fat_g += demand.fat_g_min;
        self.kcal += demand.kcal_per_min;
        self.unmet_g += partition.unmet_g;
    }

    fn into_stats(self, trace: &SimulationTrace) -> SimulationStats {
        let minutes = trace.len().max(1) as f64;
        let (final_glycogen_g, final_cho_pct) = trace
            .last()
            .map_or((0.0, 0.0), |last| (last.total_glycogen_g(), last.cho_pct));

        SimulationStats {
            final_glycogen_g,
            muscle_used_g: self.muscle_g,
            liver_used_g: self.liver_g,
            exogenous_used_g: self.exogenous_g,
            total_intake_g: self.intake_g,
            fat_burned_g: self.fat_g,
            avg_intensity_factor: self.intensity_factor_sum / minutes,
            avg_rer: self.rer_sum / minutes,
            final_cho_pct,
            min_muscle_g: trace.min_muscle_g(),
            min_liver_g: trace.min_liver_g(),
            total_kcal: self.kcal,
            unmet_cho_g: self.unmet_g,
            first_critical_minute: trace.first_critical_minute(),
        }
    }
}

/// Minute-by-minute metabolism simulator
#[derive(Debug, Clone, Default)]
pub struct MetabolismSimulator {
    config: MetabolismConfig,
}

impl MetabolismSimulator {
    /// Create a simulator with default tunables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with custom tunables
    #[must_use]
    pub const fn with_config(config: MetabolismConfig) -> Self {
        Self { config }
    }

    /// Tunables in use
    #[must_use]
    pub const fn config(&self) -> &MetabolismConfig {
        &self.config
    }

    /// Run one simulation
    #[must_use]
    pub fn simulate(&self, request: &SimulationRequest<'_>) -> SimulationResult {
        let context = RunContext {
            request,
            demand: DemandModel::new(
                request.subject,
                request.activity,
                request.metabolic_curve,
                request.crossover_pct,
                &self.config,
            ),
            schedule: IntakeSchedule::new(&request.intake, request.duration_min),
            oxidation_target_g_min: oxidation_target(&request.intake),
            alpha: absorption_alpha(request.intake.absorption_tau_min),
            initial_muscle_g: request.tank.muscle_glycogen_g.max(0.0),
        };

        let mut stores = StoreState {
            muscle_g: context.initial_muscle_g,
            liver_g: request.tank.liver_glycogen_g.max(0.0),
            gut: GutState::default(),
        };
        let mut totals = RunTotals::default();
        let mut trace = SimulationTrace::with_duration(request.duration_min);

        for minute in 0..=request.duration_min {
            trace.push(self.step(&context, minute, &mut stores, &mut totals));
        }

        let stats = totals.into_stats(&trace);
        debug!(
            duration_min = request.duration_min,
            intake_g_h = request.intake.rate_g_h,
            lab_curve = context.demand.uses_curve(),
            final_glycogen_g = stats.final_glycogen_g,
            min_liver_g = stats.min_liver_g,
            min_muscle_g = stats.min_muscle_g,
            first_critical_minute = ?stats.first_critical_minute,
            "Metabolism simulation complete"
        );

        SimulationResult { trace, stats }
    }

    fn step(
        &self,
        context: &RunContext<'_, '_>,
        minute: u32,
        stores: &mut StoreState,
        totals: &mut RunTotals,
    ) -> TracePoint {
        let demand = context
            .demand
            .compute_demand(minute, context.request.intensity_at(minute));

        let ingested_g = context.schedule.compute_intake(minute);
        stores.gut.buffer_g += ingested_g;
        totals.intake_g += ingested_g;
        let exogenous_available_g = compute_oxidation(
            &mut stores.gut,
            context.oxidation_target_g_min,
            context.alpha,
        );

        let partition = partition_demand(
            demand.cho_g_min,
            &Reserves {
                muscle_g: stores.muscle_g,
                initial_muscle_g: context.initial_muscle_g,
                liver_g: stores.liver_g,
                exogenous_available_g,
            },
            &self.config,
        );

        if minute > 0 {
            update_stores(stores, &partition);
        }
        totals.record(minute, &demand, &partition);

        TracePoint {
            minute,
            muscle_glycogen_g: stores.muscle_g,
            liver_glycogen_g: stores.liver_g,
            muscle_rate_g_min: partition.muscle_g,
            liver_rate_g_min: partition.liver_g,
            exo_rate_g_min: partition.exogenous_g,
            fat_rate_g_min: demand.fat_g_min,
            gut_buffer_g: stores.gut.buffer_g,
            cumulative_intake_g: totals.intake_g,
            rer: demand.split.rer,
            cho_pct: demand.split.cho_ratio * 100.0,
            intensity_factor: demand.intensity_factor,
            kcal_per_min: demand.kcal_per_min,
            status: GlycogenStatus::from_reserves(
                stores.liver_g,
                stores.muscle_g,
                self.config.critical_liver_g,
                self.config.warning_muscle_g,
            ),
        }
    }
}

/// Run one simulation with the global configuration
#[must_use]
pub fn simulate_metabolism(request: &SimulationRequest<'_>) -> SimulationResult {
    MetabolismSimulator::with_config(SimulationConfig::global().metabolism.clone()).simulate(request)
}
