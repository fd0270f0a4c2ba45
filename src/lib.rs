// ABOUTME: Main library entry point for the glycogen tank simulation engine
// ABOUTME: Tank model, metabolism simulator, tapering trajectory, and minimum-intake search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

#![deny(unsafe_code)]

//! # Glycogen Tank
//!
//! Models an athlete's muscle and liver glycogen reserves and simulates how
//! they drain and partially refill during and around exercise.
//!
//! ## Features
//!
//! - **Tank model**: storage capacity and current reserves from anthropometrics and lifestyle
//! - **Metabolism simulator**: minute-by-minute split of demand across muscle, liver,
//!   exogenous carbohydrate and fat, with absorption lag and fatigue drift
//! - **Tapering**: multi-day loading trajectory feeding a race-day tank
//! - **Fuelling strategy**: lowest intake rate that keeps both reserves above safety floors
//!
//! ## Architecture
//!
//! - **`glycogen_core`**: errors, constants and domain models (re-exported here)
//! - **Config**: tunables with environment overrides
//! - **Physiology**: the simulation engine
//! - **Profile**: lifestyle inputs, subject derivation and profile storage
//!
//! ## Example Usage
//!
//! ```rust
//! use glycogen_tank::models::{
//!     ActivityParams, DietType, FatigueState, IntakePlan, Sex, SleepQuality, Sport,
//!     TrainingStatus,
//! };
//! use glycogen_tank::physiology::{MetabolismSimulator, SimulationRequest, TankCalculator};
//! use glycogen_tank::profile::{AthleteProfile, ConcentrationSource};
//!
//! let profile = AthleteProfile {
//!     weight_kg: 70.0,
//!     height_cm: 178.0,
//!     body_fat_pct: 0.15,
//!     sex: Sex::Male,
//!     sport: Sport::Cycling,
//!     concentration: ConcentrationSource::TrainingStatus {
//!         status: TrainingStatus::Trained,
//!     },
//!     diet: DietType::Mixed,
//!     fatigue: FatigueState::Fresh,
//!     sleep: SleepQuality::Excellent,
//!     fasted: false,
//!     uses_creatine: false,
//!     menstrual_phase: Default::default(),
//!     glucose_mg_dl: None,
//!     muscle_mass_kg: None,
//! };
//! let subject = profile.to_subject();
//! let tank = TankCalculator::new().calculate(&subject);
//! let ride = ActivityParams::cycling(200.0, 250.0, 0.22);
//!
//! let request = SimulationRequest::new(&tank, &subject, &ride, 180)
//!     .with_intake(IntakePlan::at_rate(60.0));
//! let result = MetabolismSimulator::new().simulate(&request);
//!
//! assert_eq!(result.trace.len(), 181);
//! assert!(result.stats.final_glycogen_g >= 0.0);
//! ```

pub use glycogen_core::{constants, errors, models};

/// Simulation tunables with environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Tank calculator, substrate partitioner, metabolism simulator, tapering and intake search
pub mod physiology;

/// Athlete profile derivation and persistence boundary
pub mod profile;
