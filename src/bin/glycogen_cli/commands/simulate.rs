// ABOUTME: Simulate command for glycogen-cli
// ABOUTME: Runs the minute-by-minute metabolism simulation and prints trace and summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_tank::errors::AppResult;
use glycogen_tank::models::{Subject, TankState};
use glycogen_tank::physiology::{MetabolismSimulator, TankCalculator};

use super::CliContext;
use crate::helpers::display::{display_simulation, print_json};
use crate::helpers::scenario::{Scenario, ScenarioArgs};

type Result<T> = AppResult<T>;

/// Simulate the scenario's activity on the freshly computed tank
pub fn run(context: &CliContext, args: &ScenarioArgs, every: u32) -> Result<()> {
    let scenario = Scenario::from_file(&args.scenario)?;
    let subject = scenario.subject(args.user, &context.store)?;
    let tank = TankCalculator::with_config(context.config.tank.clone()).calculate(&subject);
    simulate_on(context, &scenario, &subject, &tank, every)
}

/// Simulate the scenario's activity on a given tank
pub fn simulate_on(
    context: &CliContext,
    scenario: &Scenario,
    subject: &Subject,
    tank: &TankState,
    every: u32,
) -> Result<()> {
    let request = scenario.request(tank, subject)?;
    let result =
        MetabolismSimulator::with_config(context.config.metabolism.clone()).simulate(&request);

    if context.json {
        print_json(&result)
    } else {
        display_simulation(&result, every);
        Ok(())
    }
}
