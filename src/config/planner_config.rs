//! Planner Configuration - operator defaults for units, reports and batch runs
//!
//! Every field has a serde default, so an empty or partial TOML file loads
//! and behaves exactly like the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;
use crate::plan::OutputFormat;
use crate::types::UnitSystem;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the trajectory planner.
///
/// Load with `PlannerConfig::load()` which searches:
/// 1. `$WELL_TRAJECTORY_CONFIG` env var
/// 2. `./planner_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Measurement system used when neither the well nor the plan sets one
    #[serde(default)]
    pub units: UnitsConfig,

    /// Report rendering
    #[serde(default)]
    pub report: ReportConfig,

    /// Batch solving
    #[serde(default)]
    pub batch: BatchConfig,
}

impl PlannerConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WELL_TRAJECTORY_CONFIG` environment variable
    /// 2. `./planner_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded planner config from {}", defaults::CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load planner config, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./planner_config.toml
        let local = PathBuf::from(defaults::CONFIG_FILE_NAME);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded planner config from ./{}", defaults::CONFIG_FILE_NAME);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", defaults::CONFIG_FILE_NAME);
                }
            }
        }

        // 3. Defaults
        info!("No {} found, using built-in defaults", defaults::CONFIG_FILE_NAME);
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings with a suggested correction; they
    /// never fail the load.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Planner config saved");
        Ok(())
    }

    /// Validate ranges. Errors block the load; warnings are logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Units
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitsConfig {
    /// Fallback measurement system: "field" or "metric"
    #[serde(default)]
    pub default: UnitSystem,
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Decimal places for text output
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// "text" or "json"
    #[serde(default)]
    pub format: OutputFormat,

    /// Echo the input record above each result
    #[serde(default)]
    pub show_inputs: bool,
}

fn default_decimals() -> usize {
    defaults::REPORT_DECIMALS
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            format: OutputFormat::default(),
            show_inputs: false,
        }
    }
}

// ============================================================================
// Batch
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Solve plan wells on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Smallest plan that is solved in parallel
    #[serde(default = "default_min_parallel_wells")]
    pub min_parallel_wells: usize,
}

fn default_parallel() -> bool {
    true
}
fn default_min_parallel_wells() -> usize {
    defaults::MIN_PARALLEL_WELLS
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            min_parallel_wells: default_min_parallel_wells(),
        }
    }
}
