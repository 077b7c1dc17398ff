//! Well Trajectory Designer
//!
//! Closed-form vertical-section planning for directional wells.
//!
//! ## Architecture
//!
//! - **Types**: unit systems, profile inputs and solved result records
//! - **Trajectory**: J, S and horizontal solvers over shared arc geometry
//! - **Plan**: TOML well plans, parallel batch solving, text/JSON reports
//! - **Config**: operator defaults loaded from `planner_config.toml`

pub mod config;
pub mod plan;
pub mod trajectory;
pub mod types;

// Re-export configuration
pub use config::PlannerConfig;

// Re-export solver entry points
pub use trajectory::{
    solve, solve_horizontal_profile, solve_j_profile, solve_s_profile, ProfileSolver,
    TrajectoryError, TrajectoryResult,
};

// Re-export commonly used types
pub use types::{
    HorizontalProfileInput, HorizontalProfileResult, JProfileInput, JProfileResult, ProfileInput,
    ProfileKind, ProfileResult, SProfileInput, SProfileResult, UnitSystem,
};

// Re-export caller layer
pub use plan::{run_plan, OutputFormat, PlanFile, Report, WellOutcome};
