//! Client-local key/value preference storage.
//!
//! The only value the portfolio persists is the theme preference. The
//! terminal front end keeps it in `preferences.toml` next to the config file;
//! the web preview keeps it in a browser cookie and never touches this module.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;

/// A string key/value store that survives restarts.
///
/// Reads never fail: a store that cannot produce a value reports `None`.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences persisted as a flat TOML table.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at the default location in the config directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Config::config_dir()?.join("preferences.toml")))
    }

    /// Opens the store at `path`.
    ///
    /// A missing or unreadable file yields an empty store; it is recreated on
    /// the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self { path, values }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(path: &Path) -> BTreeMap<String, String> {
        let Ok(text) = fs::read_to_string(path) else {
            debug!("No preferences at {}", path.display());
            return BTreeMap::new();
        };

        match toml::from_str::<BTreeMap<String, toml::Value>>(&text) {
            Ok(table) => table
                .into_iter()
                .filter_map(|(key, value)| match value {
                    toml::Value::String(s) => Some((key, s)),
                    _ => None,
                })
                .collect(),
            Err(e) => {
                warn!("Ignoring unreadable preferences at {}: {e}", path.display());
                BTreeMap::new()
            }
        }
    }

    fn write_values(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create preferences directory: {}",
                dir.display()
            ))?;
        }

        let content =
            toml::to_string_pretty(&self.values).context("Failed to serialize preferences")?;
        let temp_path = self.path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp preferences file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp preferences file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.values.get(key).map(String::as_str) == Some(value) && self.path.exists() {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.write_values()
    }
}

/// In-memory store for tests and one-shot renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    /// Number of successful writes
    pub writes: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry.
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
