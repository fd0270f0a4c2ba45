// ABOUTME: Multi-day tapering and carbohydrate-loading trajectory engine
// ABOUTME: Forward daily net balance between intake and drains, split between liver and muscle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Tapering Trajectory Engine
//!
//! Each day the athlete eats `cho_in` grams (scaled by sleep quality) and
//! spends a resting liver drain, a non-exercise share proportional to body
//! weight, and a quarter of the training energy. A surplus refills liver and
//! muscle 30/70, a deficit drains them 50/50. Both pools stay between zero
//! and their ceilings. The final reserves become a tank ready for a
//! metabolism simulation.
//!
//! # Scientific References
//!
//! - Burke, L.M., et al. (2011). Carbohydrates for training and competition.
//!   *Journal of Sports Sciences*, 29(sup1), S17-S27.
//!   <https://doi.org/10.1080/02640414.2011.585473>

use glycogen_core::models::{
    fill_percentage, DayRecord, StartState, Subject, TankState, TrajectoryDay,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{SimulationConfig, TankConfig, TaperingConfig};
use crate::physiology::tank_calculator::TankCalculator;

/// Label of the trajectory row holding the starting reserves
pub const START_LABEL: &str = "Start";

/// Day-by-day ledger and the tank it ends with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaperingResult {
    /// One row per day, preceded by the starting row
    pub trajectory: Vec<TrajectoryDay>,
    /// Reserves after the last day
    pub final_tank: TankState,
}

/// Engine for multi-day glycogen trajectories
#[derive(Debug, Clone, Default)]
pub struct TaperingEngine {
    config: TaperingConfig,
    tank: TankCalculator,
}

impl TaperingEngine {
    /// Create an engine with default tunables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom tunables
    #[must_use]
    pub const fn with_config(config: TaperingConfig, tank: TankConfig) -> Self {
        Self {
            config,
            tank: TankCalculator::with_config(tank),
        }
    }

    /// Net glycogen balance of one day (g)
    #[must_use]
    pub fn net_balance(&self, day: &DayRecord, weight_kg: f64) -> f64 {
        let cfg = &self.config;
        let activity_kcal = if day.duration > 0 {
            let hours = f64::from(day.duration) / 60.0;
            hours * cfg.activity_kcal_per_hour * day.calculated_if.max(0.0)
        } else {
            0.0
        };
        let drain = cfg
            .neat_cho_g_per_kg
            .mul_add(weight_kg.max(0.0), cfg.liver_drain_g_per_hour * 24.0)
            + activity_kcal / 4.0;

        day.cho_in
            .max(0.0)
            .mul_add(day.sleep_factor.clamp(0.0, 1.0), -drain)
    }

    /// Run the trajectory
    #[must_use]
    pub fn run(&self, subject: &Subject, days: &[DayRecord], start: StartState) -> TaperingResult {
        let reference = self.tank.calculate(subject);
        let liver_ceiling = self.tank.config().liver_reserve_ceiling_g;
        let muscle_ceiling = (reference.max_capacity_g - liver_ceiling).max(0.0);

        let mut muscle = muscle_ceiling * start.factor();
        let mut liver = liver_ceiling * start.factor();

        let mut trajectory = Vec::with_capacity(days.len() + 1);
        trajectory.push(row(START_LABEL, muscle, liver, reference.max_capacity_g, 0.0));

        for day in days {
            let net = self.net_balance(day, subject.weight_kg);
            let liver_share = if net >= 0.0 {
                self.config.replenish_liver_share
            } else {
                self.config.deplete_liver_share
            };
            liver = net.mul_add(liver_share, liver).clamp(0.0, liver_ceiling);
            muscle = net
                .mul_add(1.0 - liver_share, muscle)
                .clamp(0.0, muscle_ceiling);
            trajectory.push(row(&day.label, muscle, liver, reference.max_capacity_g, net));
        }

        let final_tank = TankState::from_reserves(
            reference.active_muscle_kg,
            reference.max_capacity_g,
            muscle,
            liver,
        );
        debug!(
            days = days.len(),
            start = start.label(),
            final_muscle_g = muscle,
            final_liver_g = liver,
            fill_pct = final_tank.fill_pct,
            "Tapering trajectory complete"
        );

        TaperingResult {
            trajectory,
            final_tank,
        }
    }
}

fn row(label: &str, muscle: f64, liver: f64, max_capacity_g: f64, net: f64) -> TrajectoryDay {
    let total = muscle + liver;
    TrajectoryDay {
        label: label.to_owned(),
        muscle_glycogen_g: muscle,
        liver_glycogen_g: liver,
        total_glycogen_g: total,
        fill_pct: fill_percentage(total, max_capacity_g),
        net_balance_g: net,
    }
}

/// Run a tapering trajectory with the global configuration
#[must_use]
pub fn tapering(subject: &Subject, days: &[DayRecord], start: StartState) -> TaperingResult {
    let config = SimulationConfig::global();
    TaperingEngine::with_config(config.tapering.clone(), config.tank.clone())
        .run(subject, days, start)
}
