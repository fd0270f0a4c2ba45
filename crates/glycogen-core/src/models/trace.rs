// ABOUTME: Per-minute simulation trace records and end-of-activity statistics
// ABOUTME: Status labels derived from liver and muscle reserves each minute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use serde::{Deserialize, Serialize};

/// Informational reserve status for one minute
///
/// Never terminal: the simulation keeps running through any status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GlycogenStatus {
    /// Reserves comfortable
    Optimal,
    /// Muscle glycogen running low
    EmptyLegs,
    /// Liver glycogen too low to hold blood glucose
    Critical,
}

impl GlycogenStatus {
    /// Classify reserves; the liver check takes precedence over the muscle check
    #[must_use]
    pub fn from_reserves(
        liver_g: f64,
        muscle_g: f64,
        critical_liver_g: f64,
        warning_muscle_g: f64,
    ) -> Self {
        if liver_g < critical_liver_g {
            Self::Critical
        } else if muscle_g < warning_muscle_g {
            Self::EmptyLegs
        } else {
            Self::Optimal
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::EmptyLegs => "Warning (empty legs)",
            Self::Critical => "CRITICAL (hypoglycemia)",
        }
    }

    /// Whether blood glucose is at risk
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }
}

/// State and fluxes recorded at one integer minute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    /// Elapsed minutes
    pub minute: u32,
    /// Residual muscle glycogen (g)
    pub muscle_glycogen_g: f64,
    /// Residual liver glycogen (g)
    pub liver_glycogen_g: f64,
    /// Muscle glycogen oxidized this minute (g/min)
    pub muscle_rate_g_min: f64,
    /// Liver glycogen released this minute (g/min)
    pub liver_rate_g_min: f64,
    /// Exogenous carbohydrate oxidized this minute (g/min)
    pub exo_rate_g_min: f64,
    /// Fat oxidized this minute (g/min)
    pub fat_rate_g_min: f64,
    /// Ingested carbohydrate not yet oxidized (g)
    pub gut_buffer_g: f64,
    /// Carbohydrate ingested so far (g)
    pub cumulative_intake_g: f64,
    /// Respiratory exchange ratio
    pub rer: f64,
    /// Carbohydrate share of energy (%)
    pub cho_pct: f64,
    /// Intensity factor of this minute
    pub intensity_factor: f64,
    /// Energy expenditure (kcal/min)
    pub kcal_per_min: f64,
    /// Reserve status after this minute's update
    pub status: GlycogenStatus,
}

impl TracePoint {
    /// Muscle plus liver glycogen (g)
    #[must_use]
    pub fn total_glycogen_g(&self) -> f64 {
        self.muscle_glycogen_g + self.liver_glycogen_g
    }
}

/// Minute-ordered trace, index equals elapsed minutes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationTrace {
    points: Vec<TracePoint>,
}

impl SimulationTrace {
    /// Empty trace with room for `minutes + 1` points
    #[must_use]
    pub fn with_duration(minutes: u32) -> Self {
        Self {
            points: Vec::with_capacity(minutes as usize + 1),
        }
    }

    /// Append the next minute
    pub fn push(&mut self, point: TracePoint) {
        self.points.push(point);
    }

    /// All points in minute order
    #[must_use]
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// Number of recorded minutes
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last recorded point
    #[must_use]
    pub fn last(&self) -> Option<&TracePoint> {
        self.points.last()
    }

    /// Lowest liver reserve over the trace (g), 0 when empty
    #[must_use]
    pub fn min_liver_g(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.liver_glycogen_g)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Lowest muscle reserve over the trace (g), 0 when empty
    #[must_use]
    pub fn min_muscle_g(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.muscle_glycogen_g)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// First minute flagged critical
    #[must_use]
    pub fn first_critical_minute(&self) -> Option<u32> {
        self.points
            .iter()
            .find(|p| p.status.is_critical())
            .map(|p| p.minute)
    }
}

/// End-of-activity summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Muscle plus liver glycogen remaining (g)
    pub final_glycogen_g: f64,
    /// Muscle glycogen oxidized (g)
    pub muscle_used_g: f64,
    /// Liver glycogen released (g)
    pub liver_used_g: f64,
    /// Exogenous carbohydrate oxidized (g)
    pub exogenous_used_g: f64,
    /// Carbohydrate ingested (g)
    pub total_intake_g: f64,
    /// Fat oxidized (g)
    pub fat_burned_g: f64,
    /// Mean intensity factor over all minutes
    pub avg_intensity_factor: f64,
    /// Mean respiratory exchange ratio over all minutes
    pub avg_rer: f64,
    /// Carbohydrate share of energy in the last minute (%)
    pub final_cho_pct: f64,
    /// Lowest muscle reserve (g)
    pub min_muscle_g: f64,
    /// Lowest liver reserve (g)
    pub min_liver_g: f64,
    /// Energy expenditure (kcal)
    pub total_kcal: f64,
    /// Carbohydrate demand no source could cover (g)
    pub unmet_cho_g: f64,
    /// First minute with a critical status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_critical_minute: Option<u32>,
}
