// ABOUTME: Glycogen tank state derived from a subject snapshot
// ABOUTME: Muscle and liver reserves, capacity, fill percentage, and hepatic flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use serde::{Deserialize, Serialize};

/// Reason the liver fill factor was lowered by a glucose reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HepaticFlag {
    /// Glucose under the hypoglycemia threshold
    Criticality,
    /// Glucose in the low-normal band
    Reduction,
}

impl HepaticFlag {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Criticality => "hepatic criticality",
            Self::Reduction => "hepatic reduction",
        }
    }
}

/// Available and maximum glycogen reserves
///
/// Derived value: recomputed whenever the subject changes, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankState {
    /// Mass of muscle recruited by the sport (kg)
    pub active_muscle_kg: f64,
    /// Maximum storable glycogen, muscle with supercompensation headroom plus liver (g)
    pub max_capacity_g: f64,
    /// Currently available glycogen, muscle plus liver (g)
    pub actual_available_g: f64,
    /// Current muscle glycogen (g)
    pub muscle_glycogen_g: f64,
    /// Current liver glycogen (g)
    pub liver_glycogen_g: f64,
    /// `actual_available_g / max_capacity_g` as a percentage
    pub fill_pct: f64,
    /// Glucose-driven liver override, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hepatic_flag: Option<HepaticFlag>,
}

impl TankState {
    /// Build a tank from explicit reserves, recomputing totals and fill
    #[must_use]
    pub fn from_reserves(
        active_muscle_kg: f64,
        max_capacity_g: f64,
        muscle_glycogen_g: f64,
        liver_glycogen_g: f64,
    ) -> Self {
        let muscle = muscle_glycogen_g.max(0.0);
        let liver = liver_glycogen_g.max(0.0);
        let available = muscle + liver;
        Self {
            active_muscle_kg,
            max_capacity_g,
            actual_available_g: available,
            muscle_glycogen_g: muscle,
            liver_glycogen_g: liver,
            fill_pct: fill_percentage(available, max_capacity_g),
            hepatic_flag: None,
        }
    }
}

/// Fill percentage, 0 when the capacity is not positive
#[must_use]
pub fn fill_percentage(available_g: f64, max_capacity_g: f64) -> f64 {
    if max_capacity_g > 0.0 {
        available_g / max_capacity_g * 100.0
    } else {
        0.0
    }
}
