// ABOUTME: Output formatting helpers for glycogen-cli
// ABOUTME: Prints tanks, simulation traces, tapering trajectories, and profiles as tables or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_tank::errors::{AppError, AppResult};
use glycogen_tank::models::{StartState, TankState, TracePoint};
use glycogen_tank::physiology::{SimulationResult, TaperingResult};
use glycogen_tank::profile::StoredProfile;
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(format!("Failed to render JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Display the glycogen tank
pub fn display_tank(tank: &TankState) {
    println!("\nGlycogen Tank");
    println!("{}", "=".repeat(50));
    println!("   Active muscle:      {:>8.1} kg", tank.active_muscle_kg);
    println!("   Max capacity:       {:>8.1} g", tank.max_capacity_g);
    println!("   Available:          {:>8.1} g", tank.actual_available_g);
    println!("   Muscle glycogen:    {:>8.1} g", tank.muscle_glycogen_g);
    println!("   Liver glycogen:     {:>8.1} g", tank.liver_glycogen_g);
    println!("   Fill:               {:>8.1} %", tank.fill_pct);
    if let Some(flag) = tank.hepatic_flag {
        println!("\nWARNING Liver reserve lowered: {}", flag.label());
    }
}

fn display_trace_header() {
    println!(
        "  min   muscle   liver  m/min  l/min  x/min  f/min    gut   rer    IF  Status"
    );
    println!("{}", "-".repeat(96));
}

fn display_trace_row(point: &TracePoint) {
    println!(
        "{:>5} {:>8.1} {:>7.1} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>6.1} {:>5.2} {:>5.2}  {}",
        point.minute,
        point.muscle_glycogen_g,
        point.liver_glycogen_g,
        point.muscle_rate_g_min,
        point.liver_rate_g_min,
        point.exo_rate_g_min,
        point.fat_rate_g_min,
        point.gut_buffer_g,
        point.rer,
        point.intensity_factor,
        point.status.label()
    );
}

/// Display a simulation trace every `every` minutes, the final minute, and the summary
pub fn display_simulation(result: &SimulationResult, every: u32) {
    let every = every.max(1);
    let last_minute = result.trace.last().map_or(0, |point| point.minute);

    println!("\nMetabolism Simulation");
    println!("{}", "=".repeat(96));
    display_trace_header();
    for point in result.trace.points() {
        if point.minute % every == 0 || point.minute == last_minute {
            display_trace_row(point);
        }
    }

    let stats = &result.stats;
    println!("\nSummary");
    println!("{}", "=".repeat(50));
    println!("   Final glycogen:     {:>8.1} g", stats.final_glycogen_g);
    println!("   Muscle used:        {:>8.1} g", stats.muscle_used_g);
    println!("   Liver used:         {:>8.1} g", stats.liver_used_g);
    println!("   Exogenous used:     {:>8.1} g", stats.exogenous_used_g);
    println!("   Ingested:           {:>8.1} g", stats.total_intake_g);
    println!("   Fat burned:         {:>8.1} g", stats.fat_burned_g);
    println!("   Energy:             {:>8.0} kcal", stats.total_kcal);
    println!("   Average IF:         {:>8.2}", stats.avg_intensity_factor);
    println!("   Average RER:        {:>8.3}", stats.avg_rer);
    println!("   Final CHO share:    {:>8.1} %", stats.final_cho_pct);
    println!("   Lowest muscle:      {:>8.1} g", stats.min_muscle_g);
    println!("   Lowest liver:       {:>8.1} g", stats.min_liver_g);
    if stats.unmet_cho_g > 0.0 {
        println!("   Unmet CHO demand:   {:>8.1} g", stats.unmet_cho_g);
    }
    match stats.first_critical_minute {
        Some(minute) => println!("\nCRITICAL Liver reserve critical from minute {minute}"),
        None => println!("\nSuccess Liver reserve stayed above the critical level"),
    }
}

/// Display a tapering trajectory
pub fn display_trajectory(result: &TaperingResult, start: StartState) {
    println!("\nTapering Trajectory (start: {})", start.label());
    println!("{}", "=".repeat(72));
    println!("Day                Muscle g   Liver g   Total g   Fill %        Net g");
    println!("{}", "-".repeat(72));
    for day in &result.trajectory {
        println!(
            "{:<16} {:>10.1} {:>9.1} {:>9.1} {:>8.1} {:>+12.1}",
            day.label,
            day.muscle_glycogen_g,
            day.liver_glycogen_g,
            day.total_glycogen_g,
            day.fill_pct,
            day.net_balance_g
        );
    }
    display_tank(&result.final_tank);
}

/// Display the minimum-intake search outcome
pub fn display_min_intake(minimum: Option<u32>, duration_min: u32, max_searched_g_h: u32) {
    println!("\nMinimum Carbohydrate Intake ({duration_min} min)");
    println!("{}", "=".repeat(50));
    match minimum {
        Some(0) => println!("Success No intake needed to keep both reserves safe"),
        Some(rate) => println!("Success Lowest sustaining intake: {rate} g/h"),
        None => println!(
            "CRITICAL No intake up to {max_searched_g_h} g/h keeps both reserves safe; shorten or ease the effort"
        ),
    }
}

/// Display a stored athlete profile
pub fn display_profile(stored: &StoredProfile) {
    let profile = &stored.profile;
    println!("\nAthlete Profile");
    println!("{}", "=".repeat(50));
    println!("   User: {}", stored.user_id);
    println!(
        "   Updated: {}",
        stored.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("   Weight: {:.1} kg", profile.weight_kg);
    println!("   Height: {:.1} cm", profile.height_cm);
    println!("   Body fat: {:.1} %", profile.body_fat_pct * 100.0);
    println!("   Sex: {}", profile.sex.label());
    println!("   Sport: {}", profile.sport.label());
    println!(
        "   Glycogen concentration: {:.1} g/kg",
        profile.concentration.concentration()
    );
    println!("   Filling factor: {:.2}", profile.filling_factor());
    println!("   Liver glycogen: {:.0} g", profile.liver_glycogen_g());
}
