// ABOUTME: Configuration error types for simulation tunables
// ABOUTME: Error variants for invalid ranges and shares, plus environment value parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

//! Configuration error types for simulation tunables.

use glycogen_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ordering between two related values is wrong (e.g., min above max)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shares that must sum to a whole don't
    #[error("Invalid shares: {0}")]
    InvalidShares(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Parse(_) => Self::config(error.to_string()),
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidShares(_)
            | ConfigError::ValueOutOfRange(_) => Self::config_invalid(error.to_string()),
        }
    }
}
