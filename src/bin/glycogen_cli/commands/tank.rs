// ABOUTME: Tank command for glycogen-cli
// ABOUTME: Computes storage capacity and current reserves for the scenario's athlete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use glycogen_tank::errors::AppResult;
use glycogen_tank::physiology::TankCalculator;

use super::CliContext;
use crate::helpers::display::{display_tank, print_json};
use crate::helpers::scenario::{Scenario, ScenarioArgs};

type Result<T> = AppResult<T>;

/// Print the glycogen tank
pub fn run(context: &CliContext, args: &ScenarioArgs) -> Result<()> {
    let scenario = Scenario::from_file(&args.scenario)?;
    let subject = scenario.subject(args.user, &context.store)?;
    let tank = TankCalculator::with_config(context.config.tank.clone()).calculate(&subject);

    if context.json {
        print_json(&tank)
    } else {
        display_tank(&tank);
        Ok(())
    }
}
