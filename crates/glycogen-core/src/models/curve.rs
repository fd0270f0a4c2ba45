// ABOUTME: Lab-measured metabolic curve mapping effort to substrate oxidation rates
// ABOUTME: Piecewise-linear lookup over up to three breakpoints with linear extrapolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use serde::{Deserialize, Serialize};

use crate::constants::curve::{CHO_EXTRAPOLATION_SLOPE, FAT_EXTRAPOLATION_SLOPE, MAX_POINTS};
use crate::errors::{AppError, AppResult};

/// One lab measurement: oxidation rates at an effort level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Effort in sport units (W or bpm)
    pub intensity: f64,
    /// Carbohydrate oxidation (g/h)
    pub cho_g_h: f64,
    /// Fat oxidation (g/h)
    pub fat_g_h: f64,
}

/// Substrate oxidation rates read from a curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstrateRates {
    /// Carbohydrate oxidation (g/h)
    pub cho_g_h: f64,
    /// Fat oxidation (g/h)
    pub fat_g_h: f64,
}

/// Validated metabolic curve, breakpoints sorted by strictly increasing effort
///
/// Between breakpoints the rates are interpolated linearly. Below the first
/// breakpoint its rates hold. Beyond the last breakpoint both substrates are
/// extrapolated from that last breakpoint: carbohydrate rises by 4.0 g/h and
/// fat falls by 0.5 g/h per unit of effort, fat never going below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct MetabolicCurve {
    points: Vec<CurvePoint>,
}

impl MetabolicCurve {
    /// Build a curve from lab breakpoints
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if there are no breakpoints, more than
    /// three, non-finite or negative values, or efforts not strictly increasing.
    pub fn new(points: Vec<CurvePoint>) -> AppResult<Self> {
        if points.is_empty() {
            return Err(AppError::invalid_input(
                "Metabolic curve needs at least one breakpoint",
            ));
        }
        if points.len() > MAX_POINTS {
            return Err(AppError::invalid_input(format!(
                "Metabolic curve supports at most {MAX_POINTS} breakpoints, got {}",
                points.len()
            )));
        }
        for point in &points {
            let values = [point.intensity, point.cho_g_h, point.fat_g_h];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(AppError::invalid_input(format!(
                    "Metabolic curve breakpoint at {:.1} has a negative or non-finite value",
                    point.intensity
                )));
            }
        }
        if points
            .windows(2)
            .any(|pair| pair[1].intensity <= pair[0].intensity)
        {
            return Err(AppError::invalid_input(
                "Metabolic curve breakpoints must have strictly increasing intensity",
            ));
        }
        Ok(Self { points })
    }

    /// Single-point curve from whole-activity lab rates at the average effort
    #[must_use]
    pub fn single_point(intensity: f64, cho_g_h: f64, fat_g_h: f64) -> Self {
        Self {
            points: vec![CurvePoint {
                intensity: intensity.max(0.0),
                cho_g_h: cho_g_h.max(0.0),
                fat_g_h: fat_g_h.max(0.0),
            }],
        }
    }

    /// Breakpoints in increasing effort order
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Oxidation rates at an effort level
    #[must_use]
    pub fn rates_at(&self, intensity: f64) -> SubstrateRates {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return SubstrateRates {
                cho_g_h: 0.0,
                fat_g_h: 0.0,
            };
        };

        if intensity <= first.intensity {
            return SubstrateRates {
                cho_g_h: first.cho_g_h,
                fat_g_h: first.fat_g_h,
            };
        }

        if intensity >= last.intensity {
            let excess = intensity - last.intensity;
            return SubstrateRates {
                cho_g_h: CHO_EXTRAPOLATION_SLOPE.mul_add(excess, last.cho_g_h),
                fat_g_h: FAT_EXTRAPOLATION_SLOPE
                    .mul_add(excess, last.fat_g_h)
                    .max(0.0),
            };
        }

        for pair in self.points.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            if intensity <= high.intensity {
                let t = (intensity - low.intensity) / (high.intensity - low.intensity);
                return SubstrateRates {
                    cho_g_h: t.mul_add(high.cho_g_h - low.cho_g_h, low.cho_g_h),
                    fat_g_h: t.mul_add(high.fat_g_h - low.fat_g_h, low.fat_g_h),
                };
            }
        }

        SubstrateRates {
            cho_g_h: last.cho_g_h,
            fat_g_h: last.fat_g_h,
        }
    }
}

impl TryFrom<Vec<CurvePoint>> for MetabolicCurve {
    type Error = AppError;

    fn try_from(points: Vec<CurvePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<MetabolicCurve> for Vec<CurvePoint> {
    fn from(curve: MetabolicCurve) -> Self {
        curve.points
    }
}
