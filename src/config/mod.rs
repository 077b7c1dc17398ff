//! Planner Configuration Module
//!
//! Operator defaults loaded from TOML: the fallback unit system, report
//! formatting and batch parallelism. Solvers never read config; only the
//! caller layer (plan runner, CLI) does.
//!
//! ## Loading Order
//!
//! 1. `WELL_TRAJECTORY_CONFIG` environment variable (path to TOML file)
//! 2. `planner_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! ```ignore
//! // In main():
//! config::init(PlannerConfig::load());
//!
//! // Anywhere in the caller layer:
//! let decimals = config::get().report.decimals;
//! ```

mod planner_config;
pub mod defaults;
pub mod validation;

pub use planner_config::*;

use std::sync::OnceLock;

/// Global planner configuration, initialized once at startup.
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Initialize the global planner configuration.
///
/// Later calls are ignored with a warning.
pub fn init(config: PlannerConfig) {
    if PLANNER_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global planner configuration.
///
/// Falls back to built-in defaults when `init()` has not been called.
pub fn get() -> &'static PlannerConfig {
    PLANNER_CONFIG.get_or_init(PlannerConfig::default)
}

/// Check whether the config has been initialized.
pub fn is_initialized() -> bool {
    PLANNER_CONFIG.get().is_some()
}
