//! Configuration loading and typed config structures for sortviz.
//!
//! The canonical configuration lives in `sortviz-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads the file. Every field has a
//! default matching the original visualizer's behavior, so an absent or
//! partial file is always usable.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level visualizer configuration.
///
/// Mirrors the structure of `sortviz-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VisualizerConfig {
    /// Animation pacing and speed-setting bounds.
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Demo run settings (algorithm, input synthesis).
    #[serde(default)]
    pub run: RunConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VisualizerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Animation pacing configuration.
///
/// The speed setting is an integer in `min_speed..=max_speed`. The pacing
/// delay for a setting `s` is `max(min_delay_ms, base_delay_ms - s *
/// delay_step_ms)`, the original visualizer's mapping: higher setting,
/// shorter delay, floored at `min_delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PacingConfig {
    /// Base suspension duration before the speed discount is applied.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Milliseconds shaved off the base delay per speed-setting unit.
    #[serde(default = "default_delay_step_ms")]
    pub delay_step_ms: u64,

    /// Floor for the suspension duration.
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Poll increment used while waiting out a pause.
    #[serde(default = "default_pause_poll_ms")]
    pub pause_poll_ms: u64,

    /// Lowest accepted speed setting.
    #[serde(default = "default_min_speed")]
    pub min_speed: u64,

    /// Highest accepted speed setting.
    #[serde(default = "default_max_speed")]
    pub max_speed: u64,

    /// Speed setting used until the caller changes it.
    #[serde(default = "default_speed")]
    pub default_speed: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: default_base_delay_ms(),
            delay_step_ms: default_delay_step_ms(),
            min_delay_ms: default_min_delay_ms(),
            pause_poll_ms: default_pause_poll_ms(),
            min_speed: default_min_speed(),
            max_speed: default_max_speed(),
            default_speed: default_speed(),
        }
    }
}

/// Demo run configuration for the engine binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Algorithm name to run when none is given on the command line.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Number of elements to synthesize for the demo input.
    #[serde(default = "default_sequence_len")]
    pub sequence_len: usize,

    /// Smallest synthesized value.
    #[serde(default = "default_min_value")]
    pub min_value: u32,

    /// Largest synthesized value.
    #[serde(default = "default_max_value")]
    pub max_value: u32,

    /// Random seed for reproducible demo inputs.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            sequence_len: default_sequence_len(),
            min_value: default_min_value(),
            max_value: default_max_value(),
            seed: default_seed(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_base_delay_ms() -> u64 {
    200
}

const fn default_delay_step_ms() -> u64 {
    20
}

const fn default_min_delay_ms() -> u64 {
    10
}

const fn default_pause_poll_ms() -> u64 {
    100
}

const fn default_min_speed() -> u64 {
    1
}

const fn default_max_speed() -> u64 {
    10
}

const fn default_speed() -> u64 {
    5
}

fn default_algorithm() -> String {
    "bubble".to_owned()
}

const fn default_sequence_len() -> usize {
    30
}

const fn default_min_value() -> u32 {
    10
}

const fn default_max_value() -> u32 {
    400
}

const fn default_seed() -> u64 {
    42
}

fn default_log_level() -> String {
    "info".to_owned()
}
