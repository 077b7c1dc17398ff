//! Caller layer: plan files, batch solving and report rendering.
//!
//! The solvers in [`crate::trajectory`] know nothing about names, files or
//! output formats. This module wraps them for operators working with many
//! wells at once.

mod batch;
mod file;
mod report;

pub use batch::{run_plan, BatchOutcome, WellOutcome};
pub use file::{PlanError, PlanFile, WellPlan};
pub use report::{OutputFormat, Report};
