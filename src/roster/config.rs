use crate::error::{RosterError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "roster.json";
const DEFAULT_DATA_FILE: &str = "data.json";

/// When `add` and `update` write the roster back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SavePolicy {
    /// Re-save after every attempt that did not fail, even duplicates and misses.
    #[default]
    Always,
    /// Only save when a user was appended or modified.
    OnChange,
}

/// Configuration for roster, stored in ./roster.json
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Data file, relative to the directory the config was loaded from
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub save_policy: SavePolicy,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            save_policy: SavePolicy::default(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            RosterError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn set_data_file(&mut self, path: impl Into<PathBuf>) {
        self.data_file = path.into();
    }

    /// The data file as an absolute-or-relative path anchored at `base`.
    pub fn resolve_data_file<P: AsRef<Path>>(&self, base: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            base.as_ref().join(&self.data_file)
        }
    }
}
