// ABOUTME: Physiological constants for glycogen storage, substrate use, and replenishment
// ABOUTME: Pure data constants organized by domain; tunable values are mirrored in the engine config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Physiological constants
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. Values that the engine allows recalibrating (muscle contribution
//! exponent, liver output ceiling, drift rates, etc.) are used as defaults for
//! the engine configuration and are never read directly by simulation code.
//!
//! References:
//! - Areta, J.L. & Hopkins, W.G. (2018). Skeletal muscle glycogen content at rest
//!   and during endurance exercise. *Sports Medicine*, 48(9), 2091-2102.
//! - Jeukendrup, A.E. (2014). A step towards personalized sports nutrition:
//!   carbohydrate intake during exercise. *Sports Medicine*, 44(S1), 25-33.
//! - Péronnet, F. & Massicotte, D. (1991). Table of nonprotein respiratory
//!   quotient: an update. *Can J Sport Sci*, 16(1), 23-29.

/// Whole-body glycogen storage model
pub mod tank {
    /// Liver glycogen reference capacity for a fed adult (g)
    pub const LIVER_RESERVE_CEILING_G: f64 = 100.0;

    /// Liver glycogen reference after an overnight fast (g)
    pub const FASTED_LIVER_GLYCOGEN_G: f64 = 40.0;

    /// Supercompensation headroom above the baseline muscle store
    pub const SUPERCOMPENSATION_HEADROOM: f64 = 1.25;

    /// Storage capacity multiplier for creatine users
    pub const CREATINE_MULTIPLIER: f64 = 1.10;

    /// Absolute physiological ceiling of muscle glycogen (g per kg of active muscle)
    pub const MUSCLE_GLYCOGEN_CEILING_G_PER_KG: f64 = 35.0;

    /// Skeletal muscle share of lean body mass, male
    pub const MALE_MUSCLE_FRACTION: f64 = 0.50;

    /// Skeletal muscle share of lean body mass, female
    pub const FEMALE_MUSCLE_FRACTION: f64 = 0.42;

    /// Muscle fraction bonus for highly trained athletes
    pub const TRAINED_MUSCLE_FRACTION_BONUS: f64 = 0.03;

    /// Glycogen concentration at which the trained bonus applies (g/kg)
    pub const TRAINED_CONCENTRATION_THRESHOLD: f64 = 22.0;

    /// Filling factor at or below which the liver is assumed partially empty
    pub const DEPLETED_FILLING_THRESHOLD: f64 = 0.6;

    /// Liver fill factor applied under a depleted filling state
    pub const DEPLETED_LIVER_FACTOR: f64 = 0.6;
}

/// Acute blood glucose overrides of the liver fill factor
pub mod glucose {
    /// Below this value the liver is considered critically empty (mg/dL)
    pub const HYPOGLYCEMIA_MG_DL: f64 = 70.0;

    /// Below this value the liver is considered reduced (mg/dL)
    pub const LOW_NORMAL_MG_DL: f64 = 85.0;

    /// Liver fill factor under hypoglycemia
    pub const CRITICAL_LIVER_FACTOR: f64 = 0.2;

    /// Upper bound of the liver fill factor under low-normal glucose
    pub const REDUCED_LIVER_FACTOR: f64 = 0.5;
}

/// Muscle glycogen concentration estimation
pub mod concentration {
    /// Lowest accepted concentration (g/kg wet muscle)
    pub const MIN_G_PER_KG: f64 = 12.0;

    /// Highest accepted concentration (g/kg wet muscle)
    pub const MAX_G_PER_KG: f64 = 26.0;

    /// Concentration at the reference `VO2max`
    pub const VO2MAX_INTERCEPT_G_PER_KG: f64 = 13.0;

    /// Reference `VO2max` of the linear model (ml/kg/min)
    pub const VO2MAX_REFERENCE: f64 = 30.0;

    /// Concentration gain per ml/kg/min of `VO2max`
    pub const VO2MAX_SLOPE: f64 = 0.24;
}

/// Bounds of the composite filling factor and its components
pub mod filling {
    /// Lowest diet factor
    pub const DIET_MIN: f64 = 0.5;
    /// Highest diet factor
    pub const DIET_MAX: f64 = 1.25;
    /// Lowest training depletion (fatigue) factor
    pub const DEPLETION_MIN: f64 = 0.6;
    /// Highest training depletion (fatigue) factor
    pub const DEPLETION_MAX: f64 = 1.0;
    /// Lowest composite filling factor
    pub const FILLING_MIN: f64 = 0.0;
    /// Highest composite filling factor
    pub const FILLING_MAX: f64 = 1.25;
}

/// Respiratory exchange ratio and substrate split
pub mod substrate {
    /// RER of pure fat oxidation
    pub const RER_MIN: f64 = 0.70;

    /// Highest RER the model reports (includes hyperventilation CO2)
    pub const RER_MAX: f64 = 1.15;

    /// Carbohydrate fraction gained per RER unit above 0.70
    pub const CHO_RATIO_SLOPE: f64 = 3.45;

    /// Crossover point (percent of threshold) the RER curve is calibrated on
    pub const STANDARD_CROSSOVER_PCT: f64 = 70.0;

    /// Lowest intensity factor fed into the RER polynomial
    pub const MIN_EFFECTIVE_INTENSITY: f64 = 0.3;

    /// Intensity factor used when the threshold reference is zero
    pub const DEFAULT_INTENSITY_FACTOR: f64 = 0.8;

    /// RER polynomial coefficients, lowest degree first (c0 + c1*x + ... + c6*x^6)
    ///
    /// Every coefficient above degree zero is positive, which keeps the curve
    /// non-decreasing for any positive intensity factor.
    pub const RER_POLYNOMIAL: [f64; 7] = [
        0.681_2, 0.117_4, 0.104_3, 0.058_6, 0.031_2, 0.014_7, 0.005_1,
    ];

    /// Energy density of oxidized carbohydrate (kcal/g)
    pub const KCAL_PER_G_CHO: f64 = 4.0;

    /// Energy density of oxidized fat (kcal/g)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Minute-by-minute metabolism model
pub mod metabolism {
    /// Joules per kilocalorie
    pub const JOULES_PER_KCAL: f64 = 4184.0;

    /// Elapsed minute after which fatigue drift starts
    pub const FATIGUE_ONSET_MIN: u32 = 60;

    /// Absolute gross efficiency lost per minute after the fatigue onset
    pub const EFFICIENCY_LOSS_PER_MIN: f64 = 0.000_1;

    /// Gross efficiency floor
    pub const MIN_EFFICIENCY: f64 = 0.15;

    /// Relative energy-cost drift per minute after the fatigue onset (heart rate mode)
    pub const HR_DRIFT_PER_MIN: f64 = 0.000_5;

    /// Exponent of the muscle contribution factor `(current/initial)^k`
    pub const MUSCLE_CONTRIBUTION_EXPONENT: f64 = 0.6;

    /// Maximum hepatic glucose output (g/min)
    pub const LIVER_MAX_OUTPUT_G_MIN: f64 = 1.2;

    /// Default fraction of absorbed carbohydrate that is oxidized
    pub const DEFAULT_OXIDATION_EFFICIENCY: f64 = 0.80;

    /// Default time constant of intestinal absorption (min)
    pub const DEFAULT_ABSORPTION_TAU_MIN: f64 = 20.0;

    /// Default serving size of a discrete carbohydrate dose (g)
    pub const DEFAULT_INTAKE_UNIT_G: f64 = 25.0;

    /// Gross energy cost of running at threshold (kcal per kg per hour)
    pub const RUNNING_KCAL_PER_KG_HOUR_AT_THRESHOLD: f64 = 15.0;
}

/// Lab metabolic curve lookup
pub mod curve {
    /// Maximum number of breakpoints in a lab curve
    pub const MAX_POINTS: usize = 3;

    /// Carbohydrate extrapolation slope beyond the last point (g/h per unit)
    pub const CHO_EXTRAPOLATION_SLOPE: f64 = 4.0;

    /// Fat extrapolation slope beyond the last point (g/h per unit)
    pub const FAT_EXTRAPOLATION_SLOPE: f64 = -0.5;
}

/// Per-minute status thresholds
pub mod status {
    /// Liver reserve under which hypoglycemia is flagged (g)
    pub const CRITICAL_LIVER_G: f64 = 20.0;

    /// Muscle reserve under which empty legs are flagged (g)
    pub const WARNING_MUSCLE_G: f64 = 100.0;
}

/// Multi-day loading model
pub mod tapering {
    /// Resting hepatic glucose drain (g/h)
    pub const LIVER_DRAIN_G_PER_HOUR: f64 = 4.0;

    /// Non-exercise carbohydrate use (g per kg body weight per day)
    pub const NEAT_CHO_G_PER_KG: f64 = 1.0;

    /// Energy cost of one hour of training at intensity factor 1.0 (kcal)
    pub const ACTIVITY_KCAL_PER_HOUR: f64 = 600.0;

    /// Liver share of a positive daily balance
    pub const REPLENISH_LIVER_SHARE: f64 = 0.3;

    /// Liver share of a negative daily balance
    pub const DEPLETE_LIVER_SHARE: f64 = 0.5;
}

/// Minimum intake search
pub mod search {
    /// Highest candidate intake rate (g/h)
    pub const MAX_INTAKE_G_H: u32 = 120;

    /// Candidate spacing (g/h)
    pub const STEP_G_H: u32 = 5;

    /// Liver reserve that must be kept over the whole activity (g)
    pub const MIN_LIVER_FLOOR_G: f64 = 5.0;

    /// Muscle reserve that must be kept over the whole activity (g)
    pub const MIN_MUSCLE_FLOOR_G: f64 = 20.0;
}
