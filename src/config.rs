//! Configuration loader/writer plus strongly typed settings structures.
//!
//! The default `config.toml` is embedded at compile time and extracted to
//! the data directory on first run; after that the file on disk wins.

use crate::draw::{PoolSharing, DEFAULT_SET_SIZE, MAX_NUMBER};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration file at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "LOTTO_FACE_DIR";

/// Top-level configuration object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub draw: DrawConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    #[serde(default = "default_set_size")]
    pub set_size: usize,
    #[serde(default = "default_sets")]
    pub default_sets: usize,
    #[serde(default = "default_max_sets")]
    pub max_sets: usize,
    #[serde(default)]
    pub pool_sharing: PoolSharing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64, // Event poll timeout in milliseconds (lower = snappier, more CPU)
    #[serde(default = "default_draw_on_startup")]
    pub draw_on_startup: bool,
}

fn default_set_size() -> usize {
    DEFAULT_SET_SIZE
}

fn default_sets() -> usize {
    1
}

fn default_max_sets() -> usize {
    10
}

fn default_poll_timeout_ms() -> u64 {
    50
}

fn default_draw_on_startup() -> bool {
    true
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            set_size: default_set_size(),
            default_sets: default_sets(),
            max_sets: default_max_sets(),
            pool_sharing: PoolSharing::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            draw_on_startup: default_draw_on_startup(),
        }
    }
}

impl DrawConfig {
    /// Clamp out-of-range values back into something drawable.
    /// Returns the number of fields that were changed.
    pub fn auto_fix(&mut self) -> usize {
        let mut fixed = 0;

        if !(1..=MAX_NUMBER as usize).contains(&self.set_size) {
            tracing::warn!(
                "draw.set_size = {} is outside 1-{}, using {}",
                self.set_size,
                MAX_NUMBER,
                DEFAULT_SET_SIZE
            );
            self.set_size = DEFAULT_SET_SIZE;
            fixed += 1;
        }
        if self.max_sets == 0 {
            tracing::warn!("draw.max_sets = 0, using {}", default_max_sets());
            self.max_sets = default_max_sets();
            fixed += 1;
        }
        let clamped = self.default_sets.clamp(1, self.max_sets);
        if clamped != self.default_sets {
            tracing::warn!(
                "draw.default_sets = {} is outside 1-{}, using {}",
                self.default_sets,
                self.max_sets,
                clamped
            );
            self.default_sets = clamped;
            fixed += 1;
        }

        fixed
    }

    /// Clamp a requested number of sets to the slider range
    pub fn clamp_sets(&self, sets: usize) -> usize {
        sets.clamp(1, self.max_sets.max(1))
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Extract defaults on first run (idempotent - only creates missing files)
        Self::extract_defaults()?;
        Self::load_from_path(&Self::config_path()?)
    }

    /// Load config from a custom file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let mut config = Self::from_toml(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;

        let fixed = config.draw.auto_fix();
        if fixed > 0 {
            tracing::info!("Auto-fixed {} draw settings", fixed);
        }

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Write the embedded default config if none exists yet
    fn extract_defaults() -> Result<()> {
        let base = Self::base_dir()?;
        fs::create_dir_all(&base)?;

        let config_path = Self::config_path()?;
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
            tracing::info!("Extracted config.toml to {:?}", config_path);
        }

        Ok(())
    }

    /// Get the base lotto-face directory (~/.lotto-face/)
    /// Can be overridden with LOTTO_FACE_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".lotto-face"))
    }

    /// Returns: ~/.lotto-face/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Persistent key-value state (theme preference)
    /// Returns: ~/.lotto-face/state.toml
    pub fn state_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("state.toml"))
    }

    /// Returns: ~/.lotto-face/lotto-face.log
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("lotto-face.log"))
    }
}
