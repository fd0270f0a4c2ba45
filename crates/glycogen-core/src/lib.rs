// ABOUTME: Core types and constants for the glycogen tank simulation engine
// ABOUTME: Foundation crate with error handling, physiological constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

#![deny(unsafe_code)]

//! # Glycogen Core
//!
//! Foundation crate providing shared types and constants for the glycogen
//! tank engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Physiological constants organized by domain
//! - **models**: Athlete snapshot, tank state, activity, intake, trace and tapering records

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological constants organized by domain
pub mod constants;

/// Core data models (Subject, `TankState`, `ActivityParams`, trace records, etc.)
pub mod models;
