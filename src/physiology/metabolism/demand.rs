// ABOUTME: Per-minute energy and carbohydrate demand for the metabolism simulator
// ABOUTME: Power or heart-rate expenditure with fatigue drift, RER model or lab curve substrates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use std::borrow::Cow;

use glycogen_core::constants::metabolism::JOULES_PER_KCAL;
use glycogen_core::constants::substrate::{KCAL_PER_G_CHO, KCAL_PER_G_FAT};
use glycogen_core::models::{ActivityParams, IntensityProfile, MetabolicCurve, Subject};

use crate::config::MetabolismConfig;
use crate::physiology::substrate::{effective_intensity, SubstrateSplit};

/// Energy and substrate demand of one minute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinuteDemand {
    /// Effort in sport units (W or bpm)
    pub intensity: f64,
    /// Effort relative to threshold
    pub intensity_factor: f64,
    /// Energy expenditure (kcal/min)
    pub kcal_per_min: f64,
    /// Carbohydrate to oxidize (g/min)
    pub cho_g_min: f64,
    /// Fat to oxidize (g/min)
    pub fat_g_min: f64,
    /// Fuel mix
    pub split: SubstrateSplit,
}

/// Run-constant inputs of the demand model
#[derive(Debug, Clone)]
pub struct DemandModel<'a> {
    activity: &'a ActivityParams,
    config: &'a MetabolismConfig,
    curve: Option<Cow<'a, MetabolicCurve>>,
    crossover_pct: f64,
    hr_base_kcal_per_hour: f64,
}

impl<'a> DemandModel<'a> {
    /// Prepare the model for one run
    ///
    /// Lab-measured whole-activity rates become a one-point curve at the
    /// average intensity when no explicit curve is given.
    #[must_use]
    pub fn new(
        subject: &Subject,
        activity: &'a ActivityParams,
        curve: Option<&'a MetabolicCurve>,
        crossover_pct: f64,
        config: &'a MetabolismConfig,
    ) -> Self {
        let curve = curve.map(Cow::Borrowed).or_else(|| {
            activity.lab_oxidation.map(|lab| {
                Cow::Owned(MetabolicCurve::single_point(
                    activity.average_intensity(),
                    lab.cho_g_h,
                    lab.fat_g_h,
                ))
            })
        });

        let hr_base_kcal_per_hour = match activity.profile {
            IntensityProfile::Running {
                kcal_per_hour: Some(kcal),
                ..
            } => kcal.max(0.0),
            _ => {
                subject.weight_kg.max(0.0)
                    * config.running_kcal_per_kg_hour
                    * activity.intensity_factor()
            }
        };

        Self {
            activity,
            config,
            curve,
            crossover_pct,
            hr_base_kcal_per_hour,
        }
    }

    /// Whether substrates come from a lab curve
    #[must_use]
    pub fn uses_curve(&self) -> bool {
        self.curve.is_some()
    }

    /// Demand at a minute for a given effort
    #[must_use]
    pub fn compute_demand(&self, minute: u32, intensity: f64) -> MinuteDemand {
        let intensity = intensity.max(0.0);
        let intensity_factor = self.activity.intensity_factor_of(intensity);
        let past_onset = f64::from(minute.saturating_sub(self.config.fatigue_onset_min));

        let (kcal_per_min, drift) = match self.activity.profile {
            IntensityProfile::Cycling { efficiency, .. } => {
                let base = efficiency.max(self.config.min_efficiency);
                let current = self
                    .config
                    .efficiency_loss_per_min
                    .mul_add(-past_onset, base)
                    .max(self.config.min_efficiency);
                (intensity * 60.0 / JOULES_PER_KCAL / current, base / current)
            }
            IntensityProfile::Running { avg_hr, .. } => {
                let drift = self.config.hr_drift_per_min.mul_add(past_onset, 1.0);
                let relative = if avg_hr > 0.0 { intensity / avg_hr } else { 1.0 };
                (self.hr_base_kcal_per_hour / 60.0 * relative * drift, drift)
            }
        };

        match &self.curve {
            Some(curve) => {
                let rates = curve.rates_at(intensity);
                let cho_g_min = rates.cho_g_h / 60.0 * drift;
                let fat_g_min = rates.fat_g_h / 60.0 * drift;
                let kcal = cho_g_min.mul_add(KCAL_PER_G_CHO, fat_g_min * KCAL_PER_G_FAT);
                let cho_share = if kcal > 0.0 {
                    cho_g_min * KCAL_PER_G_CHO / kcal
                } else {
                    0.0
                };
                MinuteDemand {
                    intensity,
                    intensity_factor,
                    kcal_per_min: kcal,
                    cho_g_min,
                    fat_g_min,
                    split: SubstrateSplit::from_cho_ratio(cho_share),
                }
            }
            None => {
                let effective = effective_intensity(
                    intensity_factor,
                    self.crossover_pct,
                    self.config.standard_crossover_pct,
                );
                let split = SubstrateSplit::at_intensity(effective);
                MinuteDemand {
                    intensity,
                    intensity_factor,
                    kcal_per_min,
                    cho_g_min: kcal_per_min * split.cho_ratio / KCAL_PER_G_CHO,
                    fat_g_min: kcal_per_min * split.fat_ratio / KCAL_PER_G_FAT,
                    split,
                }
            }
        }
    }
}
