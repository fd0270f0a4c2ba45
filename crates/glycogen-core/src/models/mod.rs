// ABOUTME: Domain models for glycogen reserve modelling
// ABOUTME: Re-exports subject, tank, activity, intake, curve, trace and tapering types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

/// Activity description and intensity profile
pub mod activity;
/// Lab metabolic curve
pub mod curve;
/// Closed factor lookup tables
pub mod factors;
/// Feeding plan
pub mod intake;
/// Athlete snapshot
pub mod subject;
/// Tank state
pub mod tank;
/// Tapering records
pub mod tapering;
/// Simulation trace and statistics
pub mod trace;

pub use activity::{ActivityParams, IntensityProfile, LabOxidation};
pub use curve::{CurvePoint, MetabolicCurve, SubstrateRates};
pub use factors::{
    CarbMix, DietType, FatigueState, MenstrualPhase, Sex, SleepQuality, Sport, TrainingStatus,
};
pub use intake::{IntakeMode, IntakePlan};
pub use subject::{glycogen_concentration_from_vo2max, Subject};
pub use tank::{fill_percentage, HepaticFlag, TankState};
pub use tapering::{DayRecord, StartState, TrajectoryDay};
pub use trace::{GlycogenStatus, SimulationStats, SimulationTrace, TracePoint};
