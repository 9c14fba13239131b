//! Configuration for the pipeline visualizer.
//!
//! This module defines the settings that drive a simulation run. It provides:
//! 1. **Defaults:** Baseline cadence and display constants.
//! 2. **Structures:** Sections for general output, clock cadence, and display.
//! 3. **Loading:** JSON parsing from a string or a file on disk.
//!
//! Every field is optional in JSON; anything omitted takes its default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::common::reg::RegisterNaming;

/// Default configuration constants.
mod defaults {
    /// Interval between automatic ticks in milliseconds.
    ///
    /// Matches the one-cycle-per-second cadence of the browser UI.
    pub const TICK_INTERVAL_MS: u64 = 1000;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsviz_core::config::Config;
/// use mipsviz_core::common::RegisterNaming;
///
/// let config = Config::from_json(r#"{
///     "clock": { "tick_interval_ms": 250, "max_ticks": 64 },
///     "display": { "register_names": "Abi" }
/// }"#)?;
///
/// assert_eq!(config.clock.tick_interval_ms, 250);
/// assert_eq!(config.clock.max_ticks, Some(64));
/// assert_eq!(config.display.register_names, RegisterNaming::Abi);
/// assert!(!config.general.trace_cycles);
/// # Ok::<(), mipsviz_core::common::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Tick cadence and bounds
    #[serde(default)]
    pub clock: ClockConfig,
    /// Presentation options
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the text is not valid configuration JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, or [`ConfigError::Parse`] if its
    /// contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print the occupancy grid after every tick
    #[serde(default)]
    pub trace_cycles: bool,
}

/// Tick cadence and bounds for drivers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Milliseconds between automatic ticks
    #[serde(default = "ClockConfig::default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Stop driving after this many ticks even if the run has not finished
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

impl ClockConfig {
    /// Returns the default tick interval.
    const fn default_tick_interval() -> u64 {
        defaults::TICK_INTERVAL_MS
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: Self::default_tick_interval(),
            max_ticks: None,
        }
    }
}

/// Presentation options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Register naming used in disassembly and snapshots
    #[serde(default)]
    pub register_names: RegisterNaming,
}
