// ABOUTME: Carbohydrate ingestion schedule for the metabolism simulator
// ABOUTME: Discrete servings or continuous trickle, closed during the end-of-activity cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_core::models::{IntakeMode, IntakePlan};

/// When and how much carbohydrate is ingested over one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeSchedule {
    mode: IntakeMode,
    dose_g: f64,
    interval_min: u32,
    continuous_g_min: f64,
    feeding_end_min: Option<u32>,
}

impl IntakeSchedule {
    /// Build the schedule for a plan over `duration_min` minutes
    ///
    /// Feeding stays open up to and including minute `duration - cutoff`; a
    /// cutoff at least as long as the activity suppresses every serving.
    #[must_use]
    pub fn new(plan: &IntakePlan, duration_min: u32) -> Self {
        let rate = plan.rate_g_h.max(0.0);
        let unit = plan.unit_g.max(0.0);
        let interval_min = if rate > 0.0 && unit > 0.0 {
            (60.0 / (rate / unit)).round_ties_even().max(1.0) as u32
        } else {
            1
        };

        Self {
            mode: plan.mode,
            dose_g: if rate > 0.0 { unit } else { 0.0 },
            interval_min,
            continuous_g_min: rate / 60.0,
            feeding_end_min: (plan.cutoff_min < duration_min)
                .then(|| duration_min - plan.cutoff_min),
        }
    }

    /// Whether feeding is allowed at a minute
    #[must_use]
    pub const fn is_open(&self, minute: u32) -> bool {
        matches!(self.feeding_end_min, Some(end) if minute <= end)
    }

    /// Minutes between discrete servings
    #[must_use]
    pub const fn interval_min(&self) -> u32 {
        self.interval_min
    }

    /// Grams ingested at a minute
    #[must_use]
    pub fn compute_intake(&self, minute: u32) -> f64 {
        if !self.is_open(minute) {
            return 0.0;
        }
        match self.mode {
            IntakeMode::Discrete if minute % self.interval_min == 0 => self.dose_g,
            IntakeMode::Discrete => 0.0,
            IntakeMode::Continuous => self.continuous_g_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_interval_rounds_to_nearest_minute() {
        let plan = IntakePlan::at_rate(60.0);
        let schedule = IntakeSchedule::new(&plan, 120);
        assert_eq!(schedule.interval_min(), 25);
        assert!((schedule.compute_intake(0) - 25.0).abs() < f64::EPSILON);
        assert!(schedule.compute_intake(24).abs() < f64::EPSILON);
        assert!((schedule.compute_intake(50) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_half_minute_interval_rounds_to_even() {
        // 120 g/h in 25 g servings is one every 12.5 min
        let plan = IntakePlan::at_rate(120.0);
        assert_eq!(IntakeSchedule::new(&plan, 60).interval_min(), 12);
    }

    #[test]
    fn test_interval_never_below_one_minute() {
        let plan = IntakePlan {
            unit_g: 1.0,
            ..IntakePlan::at_rate(120.0)
        };
        assert_eq!(IntakeSchedule::new(&plan, 60).interval_min(), 1);
    }

    #[test]
    fn test_cutoff_closes_feeding_window() {
        let plan = IntakePlan::at_rate(60.0)
            .with_mode(IntakeMode::Continuous)
            .with_cutoff(30);
        let schedule = IntakeSchedule::new(&plan, 90);
        assert!((schedule.compute_intake(60) - 1.0).abs() < f64::EPSILON);
        assert!(schedule.compute_intake(61).abs() < f64::EPSILON);

        let closed = IntakeSchedule::new(&plan.with_cutoff(90), 90);
        assert!(!closed.is_open(0));
        let beyond = IntakeSchedule::new(&plan.with_cutoff(120), 90);
        assert!(!beyond.is_open(0));
    }

    #[test]
    fn test_no_cutoff_feeds_through_final_minute() {
        let plan = IntakePlan::at_rate(60.0).with_mode(IntakeMode::Continuous);
        let schedule = IntakeSchedule::new(&plan, 60);
        assert!(schedule.is_open(60));
        assert!((schedule.compute_intake(60) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serving_due_at_window_end_is_taken() {
        let plan = IntakePlan::at_rate(60.0).with_cutoff(50);
        let schedule = IntakeSchedule::new(&plan, 100);
        assert!((schedule.compute_intake(50) - 25.0).abs() < f64::EPSILON);
        assert!(schedule.compute_intake(75).abs() < f64::EPSILON);
    }
}
