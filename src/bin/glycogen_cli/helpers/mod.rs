// ABOUTME: Re-exports helper modules for glycogen-cli
// ABOUTME: Provides scenario loading and table formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

pub mod display;
pub mod scenario;
