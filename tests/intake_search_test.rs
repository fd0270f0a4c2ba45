// ABOUTME: Integration tests for the minimum sustaining intake search
// ABOUTME: No-intake passes, threshold rates, infeasible efforts, and parallel/sequential agreement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{endurance_ride, init_test_logging, reference_subject};
use glycogen_tank::config::SearchConfig;
use glycogen_tank::models::{CarbMix, IntakeMode, IntakePlan};
use glycogen_tank::physiology::{
    minimum_intake, IntakeSearch, MetabolismSimulator, SimulationRequest, TankCalculator,
};

fn sequential_search() -> IntakeSearch {
    IntakeSearch::with_config(
        SearchConfig {
            parallel: false,
            ..SearchConfig::default()
        },
        MetabolismSimulator::new(),
    )
}

#[test]
fn test_short_ride_needs_no_intake() {
    init_test_logging();
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();

    let request = SimulationRequest::new(&tank, &subject, &ride, 120);
    assert_eq!(IntakeSearch::new().minimum_intake(&request), Some(0));
}

#[test]
fn test_found_rate_is_the_lowest_passing_candidate() {
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();
    let search = IntakeSearch::new();

    let request = SimulationRequest::new(&tank, &subject, &ride, 180);
    let rate = search.minimum_intake(&request).unwrap();

    assert_eq!(rate, 15);
    assert!(search.passes(&request, rate));
    assert!(!search.passes(&request, rate - 5));
}

#[test]
fn test_longer_rides_need_more() {
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();
    let search = IntakeSearch::new();

    let rates: Vec<u32> = [180, 210, 240]
        .into_iter()
        .map(|duration| {
            search
                .minimum_intake(&SimulationRequest::new(&tank, &subject, &ride, duration))
                .unwrap()
        })
        .collect();

    assert_eq!(rates, vec![15, 30, 45]);
}

#[test]
fn test_muscle_exhaustion_cannot_be_fed_away() {
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();

    // Exogenous carbohydrate spares the liver, not the working muscle
    let request = SimulationRequest::new(&tank, &subject, &ride, 300)
        .with_intake(IntakePlan::default().with_mix(CarbMix::MaltodextrinFructose));
    assert_eq!(IntakeSearch::new().minimum_intake(&request), None);
}

#[test]
fn test_request_rate_is_ignored() {
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();
    let search = IntakeSearch::new();

    let base = SimulationRequest::new(&tank, &subject, &ride, 180);
    let preset = base.with_intake_rate(90.0);
    assert_eq!(search.minimum_intake(&base), search.minimum_intake(&preset));
}

#[test]
fn test_parallel_matches_sequential() {
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();
    let parallel = IntakeSearch::new();
    let sequential = sequential_search();

    for duration in [90, 180, 200, 240, 300] {
        for mode in [IntakeMode::Discrete, IntakeMode::Continuous] {
            let request = SimulationRequest::new(&tank, &subject, &ride, duration)
                .with_intake(IntakePlan::default().with_mode(mode));
            assert_eq!(
                parallel.minimum_intake(&request),
                sequential.minimum_intake(&request),
                "duration {duration} mode {mode:?}"
            );
        }
    }
}

#[test]
fn test_free_function_uses_global_config() {
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();

    let found = minimum_intake(
        &tank,
        180,
        &subject,
        &ride,
        None,
        CarbMix::GlucoseOnly,
        IntakeMode::Discrete,
        0,
    );
    assert_eq!(found, Some(15));
}

#[test]
fn test_feeding_cutoff_never_lowers_requirement() {
    let subject = reference_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = endurance_ride();
    let search = IntakeSearch::new();

    let open = SimulationRequest::new(&tank, &subject, &ride, 180);
    let closed_early = open.with_intake(IntakePlan::default().with_cutoff(60));

    let open_rate = search.minimum_intake(&open).unwrap();
    let closed_rate = search.minimum_intake(&closed_early).unwrap();
    assert!(closed_rate >= open_rate);
}
