// ABOUTME: Profile commands for glycogen-cli
// ABOUTME: Saves, shows, and deletes athlete profiles in the JSON file store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use std::path::Path;

use glycogen_tank::errors::{AppError, AppResult};
use glycogen_tank::profile::ProfileStore;
use tracing::info;
use uuid::Uuid;

use super::CliContext;
use crate::helpers::display::{display_profile, print_json};
use crate::helpers::scenario::Scenario;

type Result<T> = AppResult<T>;

/// Store the scenario's profile for a user
pub fn save(context: &CliContext, user_id: Uuid, scenario_path: &Path) -> Result<()> {
    let scenario = Scenario::from_file(scenario_path)?;
    let profile = scenario
        .profile
        .ok_or_else(|| AppError::missing_field("profile"))?;
    let stored = context.store.save(user_id, profile)?;
    info!(%user_id, dir = %context.store.dir().display(), "Profile saved");

    if context.json {
        print_json(&stored)
    } else {
        println!("Profile saved for user {user_id}");
        Ok(())
    }
}

/// Print a user's stored profile
pub fn show(context: &CliContext, user_id: Uuid) -> Result<()> {
    let stored = context
        .store
        .load(user_id)?
        .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;

    if context.json {
        print_json(&stored)
    } else {
        display_profile(&stored);
        Ok(())
    }
}

/// Remove a user's stored profile
pub fn delete(context: &CliContext, user_id: Uuid) -> Result<()> {
    if context.store.delete(user_id)? {
        println!("Profile deleted for user {user_id}");
    } else {
        println!("No profile stored for user {user_id}");
    }
    Ok(())
}
