// ABOUTME: Criterion benchmarks for the glycogen simulation engine
// ABOUTME: Measures metabolism simulation length scaling, tapering, and minimum-intake search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Criterion benchmarks for the simulation engine.
//!
//! The minimum-intake search runs up to 25 full simulations, so it is
//! measured both with and without rayon.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glycogen_tank::config::SearchConfig;
use glycogen_tank::models::{
    ActivityParams, DayRecord, DietType, FatigueState, IntakePlan, MenstrualPhase, Sex,
    SleepQuality, Sport, StartState, Subject, TrainingStatus,
};
use glycogen_tank::physiology::{
    IntakeSearch, MetabolismSimulator, SimulationRequest, TankCalculator, TaperingEngine,
};
use glycogen_tank::profile::{AthleteProfile, ConcentrationSource};

fn bench_subject() -> Subject {
    AthleteProfile {
        weight_kg: 70.0,
        height_cm: 178.0,
        body_fat_pct: 0.15,
        sex: Sex::Male,
        sport: Sport::Cycling,
        concentration: ConcentrationSource::TrainingStatus {
            status: TrainingStatus::WellTrained,
        },
        diet: DietType::HighCarb,
        fatigue: FatigueState::Fresh,
        sleep: SleepQuality::Good,
        fasted: false,
        uses_creatine: false,
        menstrual_phase: MenstrualPhase::None,
        glucose_mg_dl: None,
        muscle_mass_kg: None,
    }
    .to_subject()
}

/// Benchmark one simulation at increasing activity lengths
fn bench_metabolism_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("metabolism");
    let subject = bench_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = ActivityParams::cycling(210.0, 260.0, 0.22);
    let simulator = MetabolismSimulator::new();

    for duration in [60_u32, 180, 360, 720] {
        group.throughput(Throughput::Elements(u64::from(duration) + 1));
        group.bench_with_input(
            BenchmarkId::new("simulate", duration),
            &duration,
            |b, &duration| {
                let request = SimulationRequest::new(&tank, &subject, &ride, duration)
                    .with_intake(IntakePlan::at_rate(60.0));
                b.iter(|| simulator.simulate(black_box(&request)));
            },
        );
    }

    group.finish();
}

/// Benchmark a one-week tapering trajectory
fn bench_tapering(c: &mut Criterion) {
    let subject = bench_subject();
    let days: Vec<DayRecord> = (1..=7)
        .map(|day| {
            if day % 2 == 0 {
                DayRecord::rest(format!("Day {day}"), 550.0, 0.95)
            } else {
                DayRecord::training(format!("Day {day}"), 400.0, 0.9, 90, 0.7)
            }
        })
        .collect();
    let engine = TaperingEngine::new();

    c.bench_function("tapering_week", |b| {
        b.iter(|| engine.run(black_box(&subject), black_box(&days), StartState::Normal));
    });
}

/// Benchmark the minimum-intake search, parallel and sequential
fn bench_minimum_intake(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_intake");
    let subject = bench_subject();
    let tank = TankCalculator::new().calculate(&subject);
    let ride = ActivityParams::cycling(210.0, 260.0, 0.22);
    let request = SimulationRequest::new(&tank, &subject, &ride, 300);

    for parallel in [true, false] {
        let search = IntakeSearch::with_config(
            SearchConfig {
                parallel,
                ..SearchConfig::default()
            },
            MetabolismSimulator::new(),
        );
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| search.minimum_intake(black_box(&request)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_metabolism_simulation,
    bench_tapering,
    bench_minimum_intake,
);
criterion_main!(benches);
