// ABOUTME: Profile persistence boundary keyed by user id with last-writer-wins updates
// ABOUTME: In-memory store on DashMap and a JSON-file store under the user data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glycogen Tank Contributors

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use glycogen_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::AthleteProfile;

/// Directory under the platform data dir holding profile files
const PROFILE_DIR_NAME: &str = "glycogen-tank/profiles";

/// A saved profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Owner
    pub user_id: Uuid,
    /// Profile inputs
    pub profile: AthleteProfile,
    /// Last write time
    pub updated_at: DateTime<Utc>,
}

/// Load and save profiles by user id
///
/// Saving overwrites whatever is stored; there is no version check.
pub trait ProfileStore: Send + Sync {
    /// Load a user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or decoded
    fn load(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>>;

    /// Save a user's profile, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    fn save(&self, user_id: Uuid, profile: AthleteProfile) -> AppResult<StoredProfile>;

    /// Remove a user's profile, returning whether one existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be modified
    fn delete(&self, user_id: Uuid) -> AppResult<bool>;
}

/// Process-local profile store
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<Uuid, StoredProfile>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>> {
        Ok(self.profiles.get(&user_id).map(|entry| entry.value().clone()))
    }

    fn save(&self, user_id: Uuid, profile: AthleteProfile) -> AppResult<StoredProfile> {
        let stored = StoredProfile {
            user_id,
            profile,
            updated_at: Utc::now(),
        };
        self.profiles.insert(user_id, stored.clone());
        Ok(stored)
    }

    fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        Ok(self.profiles.remove(&user_id).is_some())
    }
}

/// One JSON file per user in a directory
#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    dir: PathBuf,
}

impl JsonFileProfileStore {
    /// Store rooted at `dir`, created on first save
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform data directory
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data directory
    pub fn default_location() -> AppResult<Self> {
        dirs::data_dir()
            .map(|base| Self::new(base.join(PROFILE_DIR_NAME)))
            .ok_or_else(|| AppError::config("No platform data directory for profile storage"))
    }

    /// Directory holding the profile files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, user_id: Uuid) -> PathBuf {
        self.dir.join(format!("{user_id}.json"))
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn load(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>> {
        let path = self.path_for(user_id);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read profile {}",
                path.display()
            ))
            .with_source(e)),
        }
    }

    fn save(&self, user_id: Uuid, profile: AthleteProfile) -> AppResult<StoredProfile> {
        fs::create_dir_all(&self.dir)?;
        let stored = StoredProfile {
            user_id,
            profile,
            updated_at: Utc::now(),
        };

        // Staged write, readers never see a partial file
        let path = self.path_for(user_id);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, serde_json::to_vec_pretty(&stored)?)?;
        fs::rename(&staging, &path)?;
        debug!(%user_id, path = %path.display(), "Profile saved");

        Ok(stored)
    }

    fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        match fs::remove_file(self.path_for(user_id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
