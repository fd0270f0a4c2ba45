// ABOUTME: Shared test fixtures and logging setup for integration tests
// ABOUTME: Provides reference athletes, activities, and quiet tracing initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `glycogen_tank`

use std::env;
use std::sync::Once;

use glycogen_tank::models::{
    ActivityParams, DietType, FatigueState, MenstrualPhase, Sex, SleepQuality, Sport, Subject,
    TrainingStatus,
};
use glycogen_tank::profile::{AthleteProfile, ConcentrationSource};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats agree within a tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

/// 70 kg trained male cyclist, fully fed and rested
pub fn reference_profile() -> AthleteProfile {
    AthleteProfile {
        weight_kg: 70.0,
        height_cm: 178.0,
        body_fat_pct: 0.15,
        sex: Sex::Male,
        sport: Sport::Cycling,
        concentration: ConcentrationSource::Measured { g_per_kg: 19.0 },
        diet: DietType::Mixed,
        fatigue: FatigueState::Fresh,
        sleep: SleepQuality::Excellent,
        fasted: false,
        uses_creatine: false,
        menstrual_phase: MenstrualPhase::None,
        glucose_mg_dl: None,
        muscle_mass_kg: None,
    }
}

/// Subject snapshot of the reference profile
pub fn reference_subject() -> Subject {
    reference_profile().to_subject()
}

/// Same athlete as a runner
pub fn reference_runner() -> Subject {
    AthleteProfile {
        sport: Sport::Running,
        ..reference_profile()
    }
    .to_subject()
}

/// Trained profile using the status lookup
pub fn trained_profile() -> AthleteProfile {
    AthleteProfile {
        concentration: ConcentrationSource::TrainingStatus {
            status: TrainingStatus::Trained,
        },
        ..reference_profile()
    }
}

/// Steady endurance ride: 200 W at a 250 W FTP
pub fn endurance_ride() -> ActivityParams {
    ActivityParams::cycling(200.0, 250.0, 0.22)
}

/// Ride at threshold: 250 W at a 250 W FTP
pub fn threshold_ride() -> ActivityParams {
    ActivityParams::cycling(250.0, 250.0, 0.22)
}
