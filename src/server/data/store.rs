//! Versioned JSON document store.
//!
//! Each collection lives in one pretty-printed JSON file (`users.json`,
//! `players.json`, `trainings.json`) and is held in memory behind an async
//! read/write lock. Writes are wholesale: the entire array is replaced, the
//! file rewritten, and a monotonic version counter bumped. Callers may pass
//! the version they last observed to turn a replace into a compare-and-swap;
//! without it, the last writer wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::{player::Player, training::Training, user::User};

#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or writing a collection file.
    #[error("store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A collection failed to serialize before being written out.
    #[error("failed to encode collection '{collection}': {source}")]
    Encode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A collection file exists but does not hold a valid JSON array of
    /// records.
    #[error("collection file for '{collection}' is corrupt: {source}")]
    Corrupt {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The caller's expected version no longer matches the stored one;
    /// another writer replaced the collection in between.
    #[error("version conflict on '{collection}': expected {expected}, current {actual}")]
    VersionConflict {
        collection: &'static str,
        expected: u64,
        actual: u64,
    },
}

/// Document store holding the three collections of the application.
pub struct JsonStore {
    users: Collection<User>,
    players: Collection<Player>,
    trainings: Collection<Training>,
}

impl JsonStore {
    /// Opens the store under `dir`, creating the directory if needed.
    ///
    /// Collection files that exist are loaded eagerly; missing files start
    /// their collection out empty. The in-memory version counters always
    /// start at zero for a fresh process.
    ///
    /// # Arguments
    /// - `dir` - Data directory holding one JSON file per collection
    ///
    /// # Returns
    /// - `Ok(JsonStore)` - All collections loaded
    /// - `Err(StoreError)` - Directory creation failed or a file is corrupt
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        Ok(Self {
            users: Collection::load(dir, "users").await?,
            players: Collection::load(dir, "players").await?,
            trainings: Collection::load(dir, "trainings").await?,
        })
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    pub fn players(&self) -> &Collection<Player> {
        &self.players
    }

    pub fn trainings(&self) -> &Collection<Training> {
        &self.trainings
    }
}

/// One whole-document collection with its backing file and version counter.
pub struct Collection<T> {
    name: &'static str,
    path: PathBuf,
    state: RwLock<Versioned<T>>,
}

struct Versioned<T> {
    version: u64,
    items: Vec<T>,
}

impl<T> Collection<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    async fn load(dir: &Path, name: &'static str) -> Result<Self, StoreError> {
        let path = dir.join(format!("{name}.json"));
        let items = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                collection: name,
                source,
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            name,
            path,
            state: RwLock::new(Versioned { version: 0, items }),
        })
    }

    /// Returns the current version together with a copy of the entire array.
    pub async fn get_all(&self) -> (u64, Vec<T>) {
        let state = self.state.read().await;

        (state.version, state.items.clone())
    }

    /// Atomically replaces the entire array.
    ///
    /// The file is rewritten as pretty-printed JSON and the version bumped
    /// while the write lock is held, so readers never observe a half-applied
    /// replace. A failed write leaves the previous array and version in
    /// place.
    ///
    /// # Arguments
    /// - `items` - The full new content of the collection
    /// - `expected_version` - When `Some`, the replace only succeeds if the
    ///   stored version still matches
    ///
    /// # Returns
    /// - `Ok((version, items))` - The new version and the saved array
    /// - `Err(StoreError::VersionConflict)` - Stale `expected_version`
    /// - `Err(StoreError)` - Encoding or filesystem failure
    pub async fn replace_all(
        &self,
        items: Vec<T>,
        expected_version: Option<u64>,
    ) -> Result<(u64, Vec<T>), StoreError> {
        let mut state = self.state.write().await;

        if let Some(expected) = expected_version {
            if expected != state.version {
                return Err(StoreError::VersionConflict {
                    collection: self.name,
                    expected,
                    actual: state.version,
                });
            }
        }

        let bytes = serde_json::to_vec_pretty(&items).map_err(|source| StoreError::Encode {
            collection: self.name,
            source,
        })?;
        tokio::fs::write(&self.path, bytes).await?;

        state.version += 1;
        state.items = items;

        Ok((state.version, state.items.clone()))
    }
}
