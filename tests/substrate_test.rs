// ABOUTME: Integration tests for the RER and substrate partitioner
// ABOUTME: Curve range and monotonicity, ratio complement, and crossover-point bias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::assert_close;
use glycogen_tank::physiology::{cho_ratio, effective_intensity, fat_ratio, rer, SubstrateSplit};

#[test]
fn test_rer_stays_in_physiological_range() {
    for step in 0..=150 {
        let intensity = f64::from(step) / 100.0;
        let value = rer(intensity);
        assert!((0.70..=1.15).contains(&value), "rer({intensity}) = {value}");
    }
}

#[test]
fn test_rer_is_monotone_over_working_range() {
    let mut previous = rer(0.3);
    for step in 31..=120 {
        let current = rer(f64::from(step) / 100.0);
        assert!(current >= previous - 1e-12, "rer dropped at {step}");
        previous = current;
    }
}

#[test]
fn test_ratios_are_complementary() {
    for step in 0..=100 {
        let value = 0.70 + f64::from(step) * 0.0045;
        assert_close(cho_ratio(value) + fat_ratio(value), 1.0, 1e-12);
        assert!((0.0..=1.0).contains(&cho_ratio(value)));
    }
}

#[test]
fn test_pure_fat_and_pure_carbohydrate_ends() {
    assert_close(cho_ratio(0.70), 0.0, 1e-12);
    assert_close(cho_ratio(1.15), 1.0, 1e-12);
}

#[test]
fn test_lower_crossover_burns_more_carbohydrate() {
    let standard = SubstrateSplit::at_intensity(effective_intensity(0.75, 70.0, 70.0));
    let early = SubstrateSplit::at_intensity(effective_intensity(0.75, 55.0, 70.0));
    let late = SubstrateSplit::at_intensity(effective_intensity(0.75, 85.0, 70.0));

    assert!(early.cho_ratio > standard.cho_ratio);
    assert!(late.cho_ratio < standard.cho_ratio);
}

#[test]
fn test_effective_intensity_floor() {
    assert_close(effective_intensity(0.0, 100.0, 70.0), 0.3, 1e-12);
}

#[test]
fn test_non_finite_intensity_is_tolerated() {
    let value = rer(f64::NAN);
    assert!(value.is_finite());
    assert!((0.70..=1.15).contains(&value));
}
