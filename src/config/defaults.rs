//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable holding an explicit config file path.
pub const CONFIG_ENV_VAR: &str = "WELL_TRAJECTORY_CONFIG";

/// Config file looked up in the current working directory.
pub const CONFIG_FILE_NAME: &str = "planner_config.toml";

// ============================================================================
// Reports
// ============================================================================

/// Decimal places in text reports.
pub const REPORT_DECIMALS: usize = 3;

/// Largest decimal count accepted in config.
pub const MAX_REPORT_DECIMALS: usize = 10;

/// Above this many decimals the output carries more digits than any
/// depth or rate measurement supports.
pub const SUSPICIOUS_REPORT_DECIMALS: usize = 6;

// ============================================================================
// Batch Runner
// ============================================================================

/// Plans with fewer wells than this are solved on the calling thread.
///
/// Each solve is a few dozen floating-point operations, so small plans do
/// not amortise the rayon dispatch.
pub const MIN_PARALLEL_WELLS: usize = 8;
