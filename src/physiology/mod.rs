// ABOUTME: Physiological simulation engine for glycogen reserves
// ABOUTME: Tank calculator, substrate partitioner, metabolism simulator, tapering, and intake search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Physiology Engine
//!
//! Data flows from the tank calculator into either the metabolism simulator
//! or the tapering engine; the minimum-intake search wraps the simulator.

/// Minimum sustaining intake search
pub mod intake_search;
/// Minute-by-minute metabolism simulator
pub mod metabolism;
/// RER and substrate ratios
pub mod substrate;
/// Glycogen tank calculator
pub mod tank_calculator;
/// Multi-day tapering trajectory
pub mod tapering;

pub use intake_search::{minimum_intake, IntakeSearch};
pub use metabolism::{
    simulate_metabolism, MetabolismSimulator, SimulationRequest, SimulationResult,
};
pub use substrate::{cho_ratio, effective_intensity, fat_ratio, rer, SubstrateSplit};
pub use tank_calculator::{calculate_tank, TankCalculator};
pub use tapering::{tapering, TaperingEngine, TaperingResult};
