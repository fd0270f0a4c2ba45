// ABOUTME: Minimum-intake command for glycogen-cli
// ABOUTME: Sweeps intake rates to find the lowest one keeping both reserves above their floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_tank::errors::AppResult;
use glycogen_tank::physiology::{IntakeSearch, MetabolismSimulator, TankCalculator};
use serde_json::json;

use super::CliContext;
use crate::helpers::display::{display_min_intake, print_json};
use crate::helpers::scenario::{Scenario, ScenarioArgs};

type Result<T> = AppResult<T>;

/// Print the lowest sustaining intake rate
pub fn run(context: &CliContext, args: &ScenarioArgs) -> Result<()> {
    let scenario = Scenario::from_file(&args.scenario)?;
    let subject = scenario.subject(args.user, &context.store)?;
    let tank = TankCalculator::with_config(context.config.tank.clone()).calculate(&subject);
    let request = scenario.request(&tank, &subject)?;

    let search = IntakeSearch::with_config(
        context.config.search.clone(),
        MetabolismSimulator::with_config(context.config.metabolism.clone()),
    );
    let minimum = search.minimum_intake(&request);

    if context.json {
        print_json(&json!({
            "duration_min": scenario.duration_min,
            "min_intake_g_h": minimum,
            "max_searched_g_h": context.config.search.max_intake_g_h,
        }))
    } else {
        display_min_intake(
            minimum,
            scenario.duration_min,
            context.config.search.max_intake_g_h,
        );
        Ok(())
    }
}
