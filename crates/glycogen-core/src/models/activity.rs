// ABOUTME: Activity description feeding the metabolism simulator
// ABOUTME: Power-based cycling or heart-rate-based running, with optional lab oxidation rates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use serde::{Deserialize, Serialize};

use crate::constants::substrate::DEFAULT_INTENSITY_FACTOR;

/// How effort is measured for the activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IntensityProfile {
    /// Power meter driven (watts)
    Cycling {
        /// Average power (W)
        avg_watts: f64,
        /// Functional threshold power (W)
        ftp_watts: f64,
        /// Gross mechanical efficiency, typically 0.20-0.25
        efficiency: f64,
    },
    /// Heart rate driven (bpm)
    Running {
        /// Average heart rate (bpm)
        avg_hr: f64,
        /// Threshold heart rate (bpm)
        threshold_hr: f64,
        /// Gross energy expenditure at the average heart rate (kcal/h),
        /// estimated from body weight when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kcal_per_hour: Option<f64>,
    },
}

/// Whole-activity oxidation rates measured in a lab test at the average intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabOxidation {
    /// Carbohydrate oxidation (g/h)
    pub cho_g_h: f64,
    /// Fat oxidation (g/h)
    pub fat_g_h: f64,
}

/// Activity parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityParams {
    /// Effort measurement and reference threshold
    #[serde(flatten)]
    pub profile: IntensityProfile,
    /// Optional lab-measured substrate rates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_oxidation: Option<LabOxidation>,
}

impl ActivityParams {
    /// Power-based activity
    #[must_use]
    pub const fn cycling(avg_watts: f64, ftp_watts: f64, efficiency: f64) -> Self {
        Self {
            profile: IntensityProfile::Cycling {
                avg_watts,
                ftp_watts,
                efficiency,
            },
            lab_oxidation: None,
        }
    }

    /// Heart-rate-based activity
    #[must_use]
    pub const fn running(avg_hr: f64, threshold_hr: f64, kcal_per_hour: Option<f64>) -> Self {
        Self {
            profile: IntensityProfile::Running {
                avg_hr,
                threshold_hr,
                kcal_per_hour,
            },
            lab_oxidation: None,
        }
    }

    /// Attach lab-measured oxidation rates
    #[must_use]
    pub const fn with_lab_oxidation(mut self, lab: LabOxidation) -> Self {
        self.lab_oxidation = Some(lab);
        self
    }

    /// Whether effort is measured in watts
    #[must_use]
    pub const fn is_power_based(&self) -> bool {
        matches!(self.profile, IntensityProfile::Cycling { .. })
    }

    /// Average effort in sport units (W or bpm)
    #[must_use]
    pub const fn average_intensity(&self) -> f64 {
        match self.profile {
            IntensityProfile::Cycling { avg_watts, .. } => avg_watts,
            IntensityProfile::Running { avg_hr, .. } => avg_hr,
        }
    }

    /// Threshold reference in sport units (FTP or threshold HR)
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        match self.profile {
            IntensityProfile::Cycling { ftp_watts, .. } => ftp_watts,
            IntensityProfile::Running { threshold_hr, .. } => threshold_hr,
        }
    }

    /// Intensity factor of an effort value; 0.8 when the threshold is zero
    #[must_use]
    pub fn intensity_factor_of(&self, value: f64) -> f64 {
        let threshold = self.threshold();
        if threshold > 0.0 {
            value.max(0.0) / threshold
        } else {
            DEFAULT_INTENSITY_FACTOR
        }
    }

    /// Intensity factor of the average effort
    #[must_use]
    pub fn intensity_factor(&self) -> f64 {
        self.intensity_factor_of(self.average_intensity())
    }
}
