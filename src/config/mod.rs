//! Configuration management for chronokeys.
//!
//! Handles loading of display preferences and the startup duration. Durations
//! set from the keyboard are never written back here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::timer::{DEFAULT_DURATION_SECS, MAX_DURATION_SECS};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Startup timer settings
    #[serde(default)]
    pub timer: TimerConfig,

    /// Text and chrome around the clock
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.timer.validate();

        Ok(config)
    }

    /// Write this configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Write the default configuration to `path`, refusing to replace an
    /// existing file
    pub fn write_default(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists: {}", path.display());
        }
        Self::default().save_to(path)
    }

    /// Get the path to the default config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;

        Ok(config_dir.join("chronokeys").join("config.json"))
    }
}

/// Startup timer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Duration loaded at startup, in seconds (0..=5999)
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: u32,
}

fn default_duration_secs() -> u32 {
    DEFAULT_DURATION_SECS
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: DEFAULT_DURATION_SECS,
        }
    }
}

impl TimerConfig {
    /// Clamp the startup duration to what the draft editor can express (99:59)
    pub fn validate(&mut self) {
        if self.default_duration_secs > MAX_DURATION_SECS {
            warn!(
                configured = self.default_duration_secs,
                max = MAX_DURATION_SECS,
                "default duration too long, clamping"
            );
            self.default_duration_secs = MAX_DURATION_SECS;
        }
    }
}

/// Text and chrome around the clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Heading above the clock (hidden with `m`)
    #[serde(default = "default_title")]
    pub title: String,

    /// Credit line at the bottom, always shown
    #[serde(default)]
    pub footer: String,

    /// Show the one-line key hint bar
    #[serde(default = "default_true")]
    pub show_help_bar: bool,
}

fn default_title() -> String {
    "Countdown".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            footer: String::new(),
            show_help_bar: true,
        }
    }
}
