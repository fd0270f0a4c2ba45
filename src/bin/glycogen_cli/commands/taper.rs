// ABOUTME: Taper command for glycogen-cli
// ABOUTME: Runs the multi-day tapering trajectory and optionally races on the final tank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_tank::errors::{AppError, AppResult};
use glycogen_tank::physiology::TaperingEngine;
use tracing::info;

use super::simulate::simulate_on;
use super::CliContext;
use crate::helpers::display::{display_trajectory, print_json};
use crate::helpers::scenario::{Scenario, ScenarioArgs};

type Result<T> = AppResult<T>;

/// Trace rows printed for the race following a taper
const RACE_TRACE_EVERY_MIN: u32 = 30;

/// Print the tapering trajectory
pub fn run(context: &CliContext, args: &ScenarioArgs, simulate: bool) -> Result<()> {
    let scenario = Scenario::from_file(&args.scenario)?;
    if scenario.days.is_empty() {
        return Err(AppError::invalid_input("Scenario has no tapering days"));
    }
    let subject = scenario.subject(args.user, &context.store)?;

    let engine = TaperingEngine::with_config(
        context.config.tapering.clone(),
        context.config.tank.clone(),
    );
    let result = engine.run(&subject, &scenario.days, scenario.start_state);

    if context.json {
        print_json(&result)?;
    } else {
        display_trajectory(&result, scenario.start_state);
    }

    if simulate {
        info!(
            final_glycogen_g = result.final_tank.actual_available_g,
            "Simulating activity on tapered tank"
        );
        simulate_on(
            context,
            &scenario,
            &subject,
            &result.final_tank,
            RACE_TRACE_EVERY_MIN,
        )?;
    }
    Ok(())
}
