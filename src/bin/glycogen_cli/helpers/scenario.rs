// ABOUTME: JSON scenario files driving glycogen-cli commands
// ABOUTME: Profile, activity, feeding plan, tapering days, intensity series, and lab curve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use glycogen_tank::constants::substrate::STANDARD_CROSSOVER_PCT;
use glycogen_tank::errors::{AppError, AppResult};
use glycogen_tank::models::{
    ActivityParams, DayRecord, IntakePlan, MetabolicCurve, StartState, Subject, TankState,
};
use glycogen_tank::physiology::SimulationRequest;
use glycogen_tank::profile::{AthleteProfile, ProfileStore};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

/// Arguments shared by every scenario-driven command
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Scenario JSON file
    #[arg(long)]
    pub scenario: PathBuf,

    /// Use this user's stored profile instead of the scenario's
    #[arg(long)]
    pub user: Option<Uuid>,
}

/// Inputs of one CLI run
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Athlete inputs, optional when a stored profile is used
    #[serde(default)]
    pub profile: Option<AthleteProfile>,
    /// Activity, required by simulation commands
    #[serde(default)]
    pub activity: Option<ActivityParams>,
    /// Activity length (min)
    #[serde(default)]
    pub duration_min: u32,
    /// Feeding plan
    #[serde(default)]
    pub intake: IntakePlan,
    /// User crossover point (% of threshold)
    #[serde(default = "default_crossover_pct")]
    pub crossover_pct: f64,
    /// Tapering days
    #[serde(default)]
    pub days: Vec<DayRecord>,
    /// Reserve condition on the first tapering day
    #[serde(default)]
    pub start_state: StartState,
    /// Per-minute effort
    #[serde(default)]
    pub intensity_series: Option<Vec<f64>>,
    /// Lab metabolic curve
    #[serde(default)]
    pub metabolic_curve: Option<MetabolicCurve>,
}

const fn default_crossover_pct() -> f64 {
    STANDARD_CROSSOVER_PCT
}

impl Scenario {
    /// Read and parse a scenario file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid scenario
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read scenario {}", path.display()))
                .with_source(e)
        })?;
        let scenario: Self = serde_json::from_str(&contents).map_err(|e| {
            AppError::invalid_input(format!("Invalid scenario {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "Scenario loaded");
        Ok(scenario)
    }

    /// The activity, required for simulation
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario has no activity or a zero duration
    pub fn activity(&self) -> AppResult<&ActivityParams> {
        if self.duration_min == 0 {
            return Err(AppError::invalid_input(
                "Scenario duration_min must be positive",
            ));
        }
        self.activity
            .as_ref()
            .ok_or_else(|| AppError::missing_field("activity"))
    }

    /// Simulation request for this scenario on a given tank
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario has no activity
    pub fn request<'a>(
        &'a self,
        tank: &'a TankState,
        subject: &'a Subject,
    ) -> AppResult<SimulationRequest<'a>> {
        let activity = self.activity()?;
        let mut request = SimulationRequest::new(tank, subject, activity, self.duration_min)
            .with_intake(self.intake)
            .with_crossover(self.crossover_pct);
        if let Some(series) = self.intensity_series.as_deref() {
            request = request.with_intensity_series(series);
        }
        if let Some(curve) = self.metabolic_curve.as_ref() {
            request = request.with_metabolic_curve(curve);
        }
        Ok(request)
    }

    /// Subject from a stored profile when a user is given, else from the scenario
    ///
    /// # Errors
    ///
    /// Returns an error if the stored profile is missing or the scenario has none
    pub fn subject(&self, user: Option<Uuid>, store: &dyn ProfileStore) -> AppResult<Subject> {
        if let Some(user_id) = user {
            let stored = store
                .load(user_id)?
                .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;
            return Ok(stored.profile.to_subject());
        }
        self.profile
            .as_ref()
            .map(AthleteProfile::to_subject)
            .ok_or_else(|| AppError::missing_field("profile"))
    }
}
