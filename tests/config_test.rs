// ABOUTME: Integration tests for simulation configuration
// ABOUTME: Defaults, validation failures, environment overrides, and tuned calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use common::{assert_close, endurance_ride, reference_subject};
use glycogen_tank::config::{
    ConfigError, MetabolismConfig, SearchConfig, SimulationConfig, TankConfig, TaperingConfig,
};
use glycogen_tank::errors::{AppError, ErrorCode};
use glycogen_tank::physiology::{MetabolismSimulator, SimulationRequest, TankCalculator};
use serial_test::serial;

#[test]
fn test_defaults_validate() {
    assert!(SimulationConfig::default().validate().is_ok());
}

#[test]
fn test_search_candidates() {
    let candidates = SearchConfig::default().candidates();
    assert_eq!(candidates.first(), Some(&0));
    assert_eq!(candidates.last(), Some(&120));
    assert_eq!(candidates.len(), 25);

    let coarse = SearchConfig {
        max_intake_g_h: 50,
        step_g_h: 20,
        ..SearchConfig::default()
    };
    assert_eq!(coarse.candidates(), vec![0, 20, 40]);
}

#[test]
fn test_invalid_sections_are_rejected() {
    let tank = TankConfig {
        hypoglycemia_mg_dl: 90.0,
        ..TankConfig::default()
    };
    assert!(matches!(tank.validate(), Err(ConfigError::InvalidRange(_))));

    let metabolism = MetabolismConfig {
        liver_max_output_g_min: 0.0,
        ..MetabolismConfig::default()
    };
    assert!(matches!(
        metabolism.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let tapering = TaperingConfig {
        deplete_liver_share: 1.5,
        ..TaperingConfig::default()
    };
    assert!(matches!(
        tapering.validate(),
        Err(ConfigError::InvalidShares(_))
    ));

    let search = SearchConfig {
        step_g_h: 0,
        ..SearchConfig::default()
    };
    assert!(search.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("step_g_h must be positive").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("step_g_h must be positive"));

    let error: AppError = ConfigError::InvalidShares("liver share above 1").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    let error: AppError = ConfigError::Parse("Invalid GLYCOGEN_SEARCH_STEP".into()).into();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_environment_overrides() {
    env::set_var("GLYCOGEN_TANK_LIVER_CEILING_G", "120");
    env::set_var("GLYCOGEN_SEARCH_STEP", "10");
    env::set_var("GLYCOGEN_SEARCH_PARALLEL", "false");

    let config = SimulationConfig::load().unwrap();

    env::remove_var("GLYCOGEN_TANK_LIVER_CEILING_G");
    env::remove_var("GLYCOGEN_SEARCH_STEP");
    env::remove_var("GLYCOGEN_SEARCH_PARALLEL");

    assert_close(config.tank.liver_reserve_ceiling_g, 120.0, 1e-12);
    assert_eq!(config.search.step_g_h, 10);
    assert!(!config.search.parallel);
}

#[test]
#[serial]
fn test_unparsable_override_fails_load() {
    env::set_var("GLYCOGEN_METABOLISM_FATIGUE_ONSET_MIN", "soon");
    let result = SimulationConfig::load();
    env::remove_var("GLYCOGEN_METABOLISM_FATIGUE_ONSET_MIN");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    env::set_var("GLYCOGEN_TANK_SUPERCOMPENSATION", "0.8");
    let result = SimulationConfig::load();
    env::remove_var("GLYCOGEN_TANK_SUPERCOMPENSATION");

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_tuned_liver_output_limits_draw() {
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();
    let config = MetabolismConfig {
        liver_max_output_g_min: 0.5,
        ..MetabolismConfig::default()
    };

    let result = MetabolismSimulator::with_config(config)
        .simulate(&SimulationRequest::new(&tank, &subject, &ride, 200));

    assert!(result
        .trace
        .points()
        .iter()
        .all(|point| point.liver_rate_g_min <= 0.5 + 1e-12));
    assert!(result.stats.unmet_cho_g > 0.0);
}

#[test]
fn test_tuned_tank_ceiling() {
    let config = TankConfig {
        liver_reserve_ceiling_g: 120.0,
        ..TankConfig::default()
    };
    let tank = TankCalculator::with_config(config).calculate(&reference_subject());
    assert_close(tank.max_capacity_g, 565.134_375, 1e-6);
}
