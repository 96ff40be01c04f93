//! JSON-file-backed state store.
//!
//! One file per key under the application data directory, e.g.
//! `{data_dir}/uvpos/uv_products.json`. Every `put` writes the file before
//! returning, which is the whole durability story: single process, last
//! write wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::state_store::{StateStore, StoreError};

/// Environment variable overriding the state directory.
pub const DATA_DIR_ENV: &str = "UVPOS_DATA_DIR";

/// Durable [`StateStore`] writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create state directory at {dir:?}"))
            .map_err(storage_error)?;
        Ok(Self { dir })
    }

    /// Open the store at the default location: `$UVPOS_DATA_DIR`, or the OS
    /// app-data directory under `uvpos`.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = default_state_dir().map_err(storage_error)?;
        Self::open(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Storage(format!(
                "failed to read {path:?}: {err}"
            ))),
        }
    }

    fn put(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        fs::write(&path, payload).map_err(|err| {
            StoreError::Storage(format!("failed to write {path:?}: {err}"))
        })
    }
}

/// Resolve the state directory: env override first, then
/// `{app_data_dir}/uvpos`.
fn default_state_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    Ok(base.join("uvpos"))
}

fn storage_error(err: anyhow::Error) -> StoreError {
    StoreError::Storage(format!("{err:#}"))
}
