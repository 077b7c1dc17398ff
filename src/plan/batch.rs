//! Batch solving of a well plan.
//!
//! Wells are independent, so a plan fans out over the rayon pool once it is
//! large enough. Outcomes keep the plan's well order and one failing well
//! never prevents the others from being solved.

use rayon::prelude::*;
use tracing::{info, warn};

use super::file::{PlanFile, WellPlan};
use crate::config::BatchConfig;
use crate::trajectory::{self, TrajectoryResult};
use crate::types::{ProfileInput, ProfileResult, UnitSystem};

/// Result of solving one well.
#[derive(Debug, Clone, PartialEq)]
pub struct WellOutcome {
    pub name: String,
    pub units: UnitSystem,
    pub input: ProfileInput,
    pub result: TrajectoryResult<ProfileResult>,
}

impl WellOutcome {
    /// Solve a single named well.
    pub fn solve(name: impl Into<String>, input: ProfileInput, units: UnitSystem) -> Self {
        let result = trajectory::solve(&input, units);
        Self { name: name.into(), units, input, result }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole plan, in plan order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub wells: Vec<WellOutcome>,
}

impl BatchOutcome {
    pub fn solved(&self) -> usize {
        self.wells.iter().filter(|w| w.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.wells.len() - self.solved()
    }

    pub fn all_solved(&self) -> bool {
        self.failed() == 0
    }
}

/// Solve every well of `plan`.
///
/// `default_units` applies to wells where neither the well nor the plan
/// names a unit system.
pub fn run_plan(plan: &PlanFile, default_units: UnitSystem, batch: &BatchConfig) -> BatchOutcome {
    let solve_well = |well: &WellPlan| {
        WellOutcome::solve(well.name.clone(), well.input, plan.units_for(well, default_units))
    };

    let parallel = batch.parallel && plan.wells.len() >= batch.min_parallel_wells;
    let wells: Vec<WellOutcome> = if parallel {
        plan.wells.par_iter().map(solve_well).collect()
    } else {
        plan.wells.iter().map(solve_well).collect()
    };

    for well in &wells {
        if let Err(e) = &well.result {
            warn!(well = %well.name, profile = %well.input.kind(), code = e.code(), "{}", e);
        }
    }

    let outcome = BatchOutcome { wells };
    info!(
        wells = outcome.wells.len(),
        solved = outcome.solved(),
        failed = outcome.failed(),
        parallel,
        "Plan solved"
    );
    outcome
}
