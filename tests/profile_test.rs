// ABOUTME: Integration tests for athlete profiles and profile storage
// ABOUTME: Subject derivation, concentration sources, JSON file store, and in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{assert_close, init_test_logging, reference_profile, trained_profile};
use glycogen_tank::models::{DietType, FatigueState, MenstrualPhase, Sex, SleepQuality};
use glycogen_tank::profile::{
    AthleteProfile, ConcentrationSource, InMemoryProfileStore, JsonFileProfileStore, ProfileStore,
};
use tempfile::TempDir;
use uuid::Uuid;

#[test]
fn test_concentration_sources() {
    assert_close(trained_profile().concentration.concentration(), 18.0, 1e-12);
    assert_close(
        ConcentrationSource::Vo2Max { vo2max: 55.0 }.concentration(),
        19.0,
        1e-9,
    );
    assert_close(
        ConcentrationSource::Vo2Max { vo2max: 90.0 }.concentration(),
        26.0,
        1e-12,
    );
    assert_close(
        ConcentrationSource::Measured { g_per_kg: 30.0 }.concentration(),
        26.0,
        1e-12,
    );
}

#[test]
fn test_filling_factor_composes_lifestyle() {
    let profile = AthleteProfile {
        diet: DietType::HighCarb,
        fatigue: FatigueState::Light,
        sleep: SleepQuality::Good,
        ..reference_profile()
    };
    assert_close(profile.filling_factor(), 1.15 * 0.9 * 0.95, 1e-12);
}

#[test]
fn test_subject_derivation_clamps_inputs() {
    init_test_logging();
    let profile = AthleteProfile {
        body_fat_pct: 1.4,
        menstrual_phase: MenstrualPhase::Luteal,
        muscle_mass_kg: Some(0.0),
        ..reference_profile()
    };
    let subject = profile.to_subject();

    assert_close(subject.body_fat_pct, 1.0, 1e-12);
    assert_eq!(subject.menstrual_phase, MenstrualPhase::None);
    assert!(subject.muscle_mass_kg.is_none());
}

#[test]
fn test_female_keeps_menstrual_phase() {
    let profile = AthleteProfile {
        sex: Sex::Female,
        menstrual_phase: MenstrualPhase::Luteal,
        ..reference_profile()
    };
    assert_eq!(profile.to_subject().menstrual_phase, MenstrualPhase::Luteal);
}

#[test]
fn test_profile_json_shape() {
    let json = serde_json::json!({
        "weight_kg": 62.0,
        "height_cm": 168.0,
        "body_fat_pct": 0.2,
        "sex": "female",
        "sport": "running",
        "concentration": { "source": "vo2_max", "vo2max": 52.0 },
        "diet": "mixed",
        "fatigue": "fresh",
        "sleep": "good"
    });
    let profile: AthleteProfile = serde_json::from_value(json).unwrap();

    assert!(!profile.fasted);
    assert_eq!(profile.menstrual_phase, MenstrualPhase::None);
    assert!(profile.glucose_mg_dl.is_none());
    assert_close(profile.concentration.concentration(), 18.28, 1e-9);
}

#[test]
fn test_json_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileProfileStore::new(dir.path().join("profiles"));
    let user_id = Uuid::new_v4();

    assert!(store.load(user_id).unwrap().is_none());

    let saved = store.save(user_id, reference_profile()).unwrap();
    let loaded = store.load(user_id).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert!(dir
        .path()
        .join("profiles")
        .join(format!("{user_id}.json"))
        .exists());
}

#[test]
fn test_json_store_last_writer_wins() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileProfileStore::new(dir.path());
    let user_id = Uuid::new_v4();

    store.save(user_id, reference_profile()).unwrap();
    store
        .save(
            user_id,
            AthleteProfile {
                weight_kg: 68.5,
                ..reference_profile()
            },
        )
        .unwrap();

    let loaded = store.load(user_id).unwrap().unwrap();
    assert_close(loaded.profile.weight_kg, 68.5, 1e-12);

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_json_store_delete() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileProfileStore::new(dir.path());
    let user_id = Uuid::new_v4();

    assert!(!store.delete(user_id).unwrap());
    store.save(user_id, reference_profile()).unwrap();
    assert!(store.delete(user_id).unwrap());
    assert!(store.load(user_id).unwrap().is_none());
}

#[test]
fn test_json_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileProfileStore::new(dir.path());
    let user_id = Uuid::new_v4();
    fs::write(dir.path().join(format!("{user_id}.json")), "{ not json").unwrap();

    assert!(store.load(user_id).is_err());
}

#[test]
fn test_in_memory_store() {
    let store = InMemoryProfileStore::new();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    assert!(store.is_empty());

    store.save(first, reference_profile()).unwrap();
    store.save(second, trained_profile()).unwrap();
    store
        .save(
            first,
            AthleteProfile {
                fasted: true,
                ..reference_profile()
            },
        )
        .unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.load(first).unwrap().unwrap().profile.fasted);
    assert!(store.delete(second).unwrap());
    assert!(store.load(second).unwrap().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_stores_are_interchangeable() {
    let dir = TempDir::new().unwrap();
    let stores: Vec<Box<dyn ProfileStore>> = vec![
        Box::new(InMemoryProfileStore::new()),
        Box::new(JsonFileProfileStore::new(dir.path())),
    ];
    let user_id = Uuid::new_v4();

    for store in &stores {
        let saved = store.save(user_id, reference_profile()).unwrap();
        assert_eq!(store.load(user_id).unwrap().unwrap().profile, saved.profile);
    }
}
