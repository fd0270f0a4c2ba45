// ABOUTME: Closed lookup tables for lifestyle and physiology factors
// ABOUTME: Each variant carries its numeric coefficient and display label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use serde::{Deserialize, Serialize};

use crate::constants::tank;

/// Biological sex for muscle mass estimation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (higher skeletal muscle share of lean mass)
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Skeletal muscle share of lean body mass
    #[must_use]
    pub const fn muscle_fraction(self) -> f64 {
        match self {
            Self::Male => tank::MALE_MUSCLE_FRACTION,
            Self::Female => tank::FEMALE_MUSCLE_FRACTION,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Training status, mapped to a resting muscle glycogen concentration
///
/// Reference: Areta & Hopkins (2018), resting concentrations by training level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// Sedentary, no structured training
    Sedentary,
    /// Recreational, a few sessions per week
    Recreational,
    /// Trained amateur
    Trained,
    /// Well-trained competitive athlete
    WellTrained,
    /// Elite / professional
    Elite,
}

impl TrainingStatus {
    /// Resting muscle glycogen concentration (g/kg wet muscle)
    #[must_use]
    pub const fn glycogen_concentration(self) -> f64 {
        match self {
            Self::Sedentary => 13.0,
            Self::Recreational => 15.0,
            Self::Trained => 18.0,
            Self::WellTrained => 21.0,
            Self::Elite => 24.0,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Recreational => "Recreational",
            Self::Trained => "Trained",
            Self::WellTrained => "Well trained",
            Self::Elite => "Elite",
        }
    }
}

/// Sport discipline, carrying the fraction of total muscle mass that is active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Road / track / indoor cycling (legs dominant)
    Cycling,
    /// Running
    Running,
    /// Triathlon (mixed recruitment)
    Triathlon,
    /// Swimming (upper body dominant)
    Swimming,
    /// Cross-country skiing (whole body)
    CrossCountrySkiing,
    /// Rowing
    Rowing,
    /// Intermittent team sport
    TeamSport,
}

impl Sport {
    /// Fraction of total skeletal muscle recruited, in [0, 1]
    #[must_use]
    pub const fn active_fraction(self) -> f64 {
        match self {
            Self::Cycling => 0.63,
            Self::Running => 0.70,
            Self::Triathlon => 0.75,
            Self::Swimming => 0.55,
            Self::CrossCountrySkiing => 0.85,
            Self::Rowing => 0.80,
            Self::TeamSport => 0.60,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cycling => "Cycling",
            Self::Running => "Running",
            Self::Triathlon => "Triathlon",
            Self::Swimming => "Swimming",
            Self::CrossCountrySkiing => "Cross-country skiing",
            Self::Rowing => "Rowing",
            Self::TeamSport => "Team sport",
        }
    }
}

/// Recent dietary pattern (previous 48-72 h)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Ketogenic, under 50 g carbohydrate per day
    Ketogenic,
    /// Low carbohydrate, 2-3 g/kg
    LowCarb,
    /// Mixed diet, 4-6 g/kg
    Mixed,
    /// High carbohydrate, 7-8 g/kg
    HighCarb,
    /// Carbohydrate loading, 10-12 g/kg
    CarbLoading,
}

impl DietType {
    /// Filling multiplier, within [0.5, 1.25]
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Ketogenic => 0.5,
            Self::LowCarb => 0.7,
            Self::Mixed => 1.0,
            Self::HighCarb => 1.15,
            Self::CarbLoading => 1.25,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ketogenic => "Ketogenic",
            Self::LowCarb => "Low carb",
            Self::Mixed => "Mixed",
            Self::HighCarb => "High carb",
            Self::CarbLoading => "Carb loading",
        }
    }
}

/// Residual training fatigue (glycogen not yet restored from recent sessions)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FatigueState {
    /// Fully rested
    Fresh,
    /// Light session in the last 24 h
    Light,
    /// Moderate session in the last 24 h
    Moderate,
    /// Hard session in the last 24 h
    Heavy,
    /// Multi-day block or race without recovery
    Exhausted,
}

impl FatigueState {
    /// Depletion multiplier, within [0.6, 1.0]
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Fresh => 1.0,
            Self::Light => 0.9,
            Self::Moderate => 0.8,
            Self::Heavy => 0.7,
            Self::Exhausted => 0.6,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fresh => "Fresh",
            Self::Light => "Light fatigue",
            Self::Moderate => "Moderate fatigue",
            Self::Heavy => "Heavy fatigue",
            Self::Exhausted => "Exhausted",
        }
    }
}

/// Sleep quality of the previous night(s)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    /// 8 h or more, uninterrupted
    Excellent,
    /// 7-8 h
    Good,
    /// 6-7 h or fragmented
    Fair,
    /// Under 6 h
    Poor,
}

impl SleepQuality {
    /// Storage efficiency multiplier
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Excellent => 1.0,
            Self::Good => 0.95,
            Self::Fair => 0.9,
            Self::Poor => 0.8,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Menstrual cycle phase
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MenstrualPhase {
    /// Not applicable / not tracked
    #[default]
    None,
    /// Follicular phase
    Follicular,
    /// Luteal phase
    Luteal,
}

impl MenstrualPhase {
    /// Filling multiplier (never above 1.0)
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Follicular => 0.90,
            Self::Luteal => 0.95,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Not applicable",
            Self::Follicular => "Follicular",
            Self::Luteal => "Luteal",
        }
    }
}

/// Carbohydrate blend, determining the intestinal transport ceiling
///
/// Reference: Jeukendrup (2014), multiple transportable carbohydrates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CarbMix {
    /// Glucose / maltodextrin only (SGLT1 bound)
    #[default]
    GlucoseOnly,
    /// Glucose:fructose 2:1
    GlucoseFructose,
    /// Maltodextrin:fructose 1:0.8
    MaltodextrinFructose,
}

impl CarbMix {
    /// Maximum exogenous oxidation rate (g/h)
    #[must_use]
    pub const fn max_oxidation_g_h(self) -> f64 {
        match self {
            Self::GlucoseOnly => 60.0,
            Self::GlucoseFructose => 90.0,
            Self::MaltodextrinFructose => 120.0,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GlucoseOnly => "Glucose only (max 60 g/h)",
            Self::GlucoseFructose => "Glucose:fructose 2:1 (max 90 g/h)",
            Self::MaltodextrinFructose => "Maltodextrin:fructose 1:0.8 (max 120 g/h)",
        }
    }
}
