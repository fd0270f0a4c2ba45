// ABOUTME: Integration tests for the glycogen tank calculator
// ABOUTME: Capacity, filling, liver overrides from glucose, and profile-derived subjects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging, reference_profile, reference_subject};
use glycogen_tank::config::TankConfig;
use glycogen_tank::models::{DietType, FatigueState, HepaticFlag, MenstrualPhase, Sex, SleepQuality};
use glycogen_tank::physiology::{calculate_tank, TankCalculator};
use glycogen_tank::profile::AthleteProfile;

#[test]
fn test_reference_athlete_tank() {
    init_test_logging();
    let tank = TankCalculator::new().calculate(&reference_subject());

    assert_close(tank.active_muscle_kg, 18.7425, 1e-6);
    assert_close(tank.muscle_glycogen_g, 356.1075, 1e-6);
    assert_close(tank.liver_glycogen_g, 100.0, 1e-9);
    assert_close(tank.max_capacity_g, 545.134_375, 1e-6);
    assert_close(tank.actual_available_g, 456.1075, 1e-6);
    assert_close(tank.fill_pct, 83.669, 0.01);
    assert!(tank.hepatic_flag.is_none());
}

#[test]
fn test_free_function_matches_default_calculator() {
    let subject = reference_subject();
    assert_eq!(calculate_tank(&subject), TankCalculator::new().calculate(&subject));
}

#[test]
fn test_carb_loading_fills_to_headroom() {
    let subject = AthleteProfile {
        diet: DietType::CarbLoading,
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);

    // 1.25 filling reaches exactly the supercompensated capacity
    assert_close(tank.muscle_glycogen_g, 445.134_375, 1e-6);
    assert_close(tank.actual_available_g, tank.max_capacity_g, 1e-6);
    assert_close(tank.fill_pct, 100.0, 1e-6);
}

#[test]
fn test_creatine_raises_capacity_and_reserves() {
    let subject = AthleteProfile {
        uses_creatine: true,
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);

    assert_close(tank.max_capacity_g, 589.647_812_5, 1e-6);
    assert_close(tank.muscle_glycogen_g, 391.718_25, 1e-6);
}

#[test]
fn test_depleted_filling_reduces_liver() {
    let subject = AthleteProfile {
        diet: DietType::Ketogenic,
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);

    assert_close(tank.muscle_glycogen_g, 178.053_75, 1e-6);
    assert_close(tank.liver_glycogen_g, 60.0, 1e-9);
}

#[test]
fn test_fatigue_and_sleep_compound() {
    let subject = AthleteProfile {
        fatigue: FatigueState::Moderate,
        sleep: SleepQuality::Poor,
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);

    // 0.8 x 0.8 = 0.64 stays above the depleted threshold
    assert_close(tank.muscle_glycogen_g, 356.1075 * 0.64, 1e-6);
    assert_close(tank.liver_glycogen_g, 100.0, 1e-9);
}

#[test]
fn test_fasted_liver() {
    let subject = AthleteProfile {
        fasted: true,
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);
    assert_close(tank.liver_glycogen_g, 40.0, 1e-9);
}

#[test]
fn test_hypoglycemia_flags_hepatic_criticality() {
    let subject = AthleteProfile {
        glucose_mg_dl: Some(65.0),
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);

    assert_eq!(tank.hepatic_flag, Some(HepaticFlag::Criticality));
    assert_close(tank.liver_glycogen_g, 20.0, 1e-9);
}

#[test]
fn test_low_normal_glucose_band_is_inclusive() {
    let at_edge = AthleteProfile {
        glucose_mg_dl: Some(85.0),
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&at_edge);
    assert_eq!(tank.hepatic_flag, Some(HepaticFlag::Reduction));
    assert_close(tank.liver_glycogen_g, 50.0, 1e-9);

    let above = AthleteProfile {
        glucose_mg_dl: Some(86.0),
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&above);
    assert!(tank.hepatic_flag.is_none());
    assert_close(tank.liver_glycogen_g, 100.0, 1e-9);
}

#[test]
fn test_glucose_override_never_raises_depleted_liver() {
    let subject = AthleteProfile {
        diet: DietType::Ketogenic,
        glucose_mg_dl: Some(80.0),
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);

    assert_eq!(tank.hepatic_flag, Some(HepaticFlag::Reduction));
    assert_close(tank.liver_glycogen_g, 50.0, 1e-9);
}

#[test]
fn test_female_menstrual_phase_scales_muscle() {
    let subject = AthleteProfile {
        sex: Sex::Female,
        menstrual_phase: MenstrualPhase::Follicular,
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);

    let active = 70.0 * 0.85 * 0.42 * 0.63;
    assert_close(tank.active_muscle_kg, active, 1e-9);
    assert_close(tank.muscle_glycogen_g, active * 19.0 * 0.90, 1e-6);
}

#[test]
fn test_measured_muscle_mass_overrides_estimate() {
    let subject = AthleteProfile {
        muscle_mass_kg: Some(35.0),
        ..reference_profile()
    }
    .to_subject();
    let tank = TankCalculator::new().calculate(&subject);
    assert_close(tank.active_muscle_kg, 35.0 * 0.63, 1e-9);
}

#[test]
fn test_muscle_never_exceeds_ceiling() {
    let mut subject = AthleteProfile {
        diet: DietType::CarbLoading,
        uses_creatine: true,
        ..reference_profile()
    }
    .to_subject();
    subject.glycogen_conc_g_kg = 26.0;

    let config = TankConfig {
        muscle_ceiling_g_per_kg: 30.0,
        ..TankConfig::default()
    };
    let tank = TankCalculator::with_config(config).calculate(&subject);

    assert!(tank.muscle_glycogen_g <= tank.active_muscle_kg * 30.0 + 1e-9);
    assert_close(tank.muscle_glycogen_g, tank.active_muscle_kg * 30.0, 1e-9);
}

#[test]
fn test_out_of_range_concentration_is_clamped() {
    let mut low = reference_subject();
    low.glycogen_conc_g_kg = 5.0;
    let tank = TankCalculator::new().calculate(&low);
    assert_close(tank.muscle_glycogen_g, tank.active_muscle_kg * 12.0, 1e-9);
}

#[test]
fn test_zero_weight_yields_empty_muscle() {
    let mut subject = reference_subject();
    subject.weight_kg = 0.0;
    let tank = TankCalculator::new().calculate(&subject);

    assert_close(tank.active_muscle_kg, 0.0, 1e-12);
    assert_close(tank.muscle_glycogen_g, 0.0, 1e-12);
    assert_close(tank.max_capacity_g, 100.0, 1e-9);
    assert_close(tank.fill_pct, 100.0, 1e-9);
}

#[test]
fn test_fill_stays_in_range_for_lifestyle_inputs() {
    let diets = [
        DietType::Ketogenic,
        DietType::LowCarb,
        DietType::Mixed,
        DietType::HighCarb,
        DietType::CarbLoading,
    ];
    let fatigue_states = [
        FatigueState::Fresh,
        FatigueState::Moderate,
        FatigueState::Exhausted,
    ];
    let calculator = TankCalculator::new();

    for diet in diets {
        for fatigue in fatigue_states {
            for creatine in [false, true] {
                let subject = AthleteProfile {
                    diet,
                    fatigue,
                    uses_creatine: creatine,
                    ..reference_profile()
                }
                .to_subject();
                let tank = calculator.calculate(&subject);

                assert!((0.0..=100.0 + 1e-9).contains(&tank.fill_pct), "{tank:?}");
                assert!(tank.actual_available_g >= 0.0);
                assert!(tank.muscle_glycogen_g <= tank.active_muscle_kg * 35.0 + 1e-9);
            }
        }
    }
}
