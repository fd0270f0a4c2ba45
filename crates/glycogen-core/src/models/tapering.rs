// ABOUTME: Multi-day tapering and carbohydrate-loading records
// ABOUTME: Daily inputs, starting reserve condition, and per-day trajectory rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use serde::{Deserialize, Serialize};

/// One day of the lead-in to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day label shown in the trajectory
    pub label: String,
    /// Carbohydrate eaten (g)
    pub cho_in: f64,
    /// Sleep quality multiplier applied to the intake
    pub sleep_factor: f64,
    /// Training duration (min), 0 on rest days
    #[serde(default)]
    pub duration: u32,
    /// Intensity factor of the day's training
    #[serde(default)]
    pub calculated_if: f64,
}

impl DayRecord {
    /// Rest day
    #[must_use]
    pub fn rest(label: impl Into<String>, cho_in: f64, sleep_factor: f64) -> Self {
        Self {
            label: label.into(),
            cho_in,
            sleep_factor,
            duration: 0,
            calculated_if: 0.0,
        }
    }

    /// Training day
    #[must_use]
    pub fn training(
        label: impl Into<String>,
        cho_in: f64,
        sleep_factor: f64,
        duration: u32,
        calculated_if: f64,
    ) -> Self {
        Self {
            label: label.into(),
            cho_in,
            sleep_factor,
            duration,
            calculated_if,
        }
    }
}

/// Reserve condition on the first day, as a share of the ceilings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StartState {
    /// After a glycogen-depleting block
    Depleted,
    /// Ordinary training week
    #[default]
    Normal,
    /// A couple of easy days behind
    Rested,
    /// Already loaded
    Supercompensated,
}

impl StartState {
    /// Share of the muscle and liver ceilings filled at the start
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Depleted => 0.40,
            Self::Normal => 0.75,
            Self::Rested => 0.90,
            Self::Supercompensated => 1.00,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Depleted => "Depleted",
            Self::Normal => "Normal",
            Self::Rested => "Rested",
            Self::Supercompensated => "Supercompensated",
        }
    }
}

/// Reserves at the end of one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryDay {
    /// Day label, "Start" for the initial row
    pub label: String,
    /// Muscle glycogen (g)
    pub muscle_glycogen_g: f64,
    /// Liver glycogen (g)
    pub liver_glycogen_g: f64,
    /// Muscle plus liver (g)
    pub total_glycogen_g: f64,
    /// Total against the tank's maximum capacity (%)
    pub fill_pct: f64,
    /// Net balance applied that day (g), 0 for the initial row
    pub net_balance_g: f64,
}
