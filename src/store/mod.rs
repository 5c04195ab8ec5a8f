// ABOUTME: Flat-file JSON record store and the domain managers built on it
// ABOUTME: Provides load/save per collection with atomic overwrites and write locking
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record store
//!
//! Each collection is one JSON array file under the configured data
//! directory. Loads degrade to an empty collection when the file is missing
//! or corrupt; saves are atomic full overwrites (write to a temp file, then
//! rename). Mutating operations take a per-collection write lock around
//! their read-modify-write cycle; readers are lock-free and may observe the
//! previous snapshot.

/// Exercise catalog manager
pub mod exercises;
/// Workout session manager with completion tracking
pub mod sessions;
/// Workout split manager
pub mod splits;

use crate::errors::{AppError, AppResult};
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{error, warn};

/// Collection name for the exercise catalog
pub const EXERCISES: &str = "exercises";
/// Collection name for workout splits
pub const WORKOUT_SPLITS: &str = "workout_splits";
/// Collection name for workout sessions
pub const WORKOUT_SESSIONS: &str = "workout_sessions";

/// A stored record addressable by id
pub trait Record {
    /// The record's unique identifier
    fn id(&self) -> &str;
}

/// Find a record by id within a loaded collection
pub fn find_by_id<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// Flat-file JSON store, one collection per file
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl JsonStore {
    /// Create a store rooted at the given data directory
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            locks: DashMap::new(),
        }
    }

    /// The directory holding the collection files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory if it does not exist
    pub async fn ensure_data_dir(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}: {e}",
                self.data_dir.display()
            ))
        })
    }

    /// Acquire the write lock for a collection
    ///
    /// Held across a full read-modify-write cycle so concurrent mutations of
    /// the same collection serialize instead of racing on the file.
    pub async fn write_lock(&self, collection: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(collection.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Load all records of a collection
    ///
    /// A missing file yields an empty collection. A corrupt file also yields
    /// an empty collection (logged at WARN); the store degrades rather than
    /// failing the request.
    pub async fn load<T: DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        let path = self.collection_path(collection);
        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(collection, error = %e, "Failed to read collection file, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&contents) {
            Ok(records) => records,
            Err(e) => {
                warn!(collection, error = %e, "Corrupt collection file, treating as empty");
                Vec::new()
            }
        }
    }

    /// Save all records of a collection (atomic full overwrite)
    ///
    /// Serializes to a temp file next to the target and renames it into
    /// place. Failures are logged at ERROR and returned to the caller.
    pub async fn save<T: Serialize>(&self, collection: &str, records: &[T]) -> AppResult<()> {
        let path = self.collection_path(collection);
        let tmp_path = path.with_extension("json.tmp");

        let contents = serde_json::to_vec_pretty(records).map_err(|e| {
            error!(collection, error = %e, "Failed to serialize collection");
            AppError::storage(format!("Failed to serialize {collection}: {e}"))
        })?;

        tokio::fs::write(&tmp_path, &contents).await.map_err(|e| {
            error!(collection, error = %e, "Failed to write collection file");
            AppError::storage(format!("Failed to write {collection}: {e}"))
        })?;

        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            error!(collection, error = %e, "Failed to replace collection file");
            AppError::storage(format!("Failed to replace {collection}: {e}"))
        })
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }
}
