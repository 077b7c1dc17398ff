//! Trajectory Solver Module
//!
//! Closed-form vertical-section geometry for the three canonical well
//! profiles. All math here is deterministic trigonometry on circular arcs and
//! straight tangents - no iteration, no state, no I/O.
//!
//! ## Profiles
//! - `solve_j_profile()` - build and hold
//! - `solve_s_profile()` - build, hold and drop back to vertical
//! - `solve_horizontal_profile()` - build, hold and build to 90°
//!
//! ## Shared primitives
//! - `geometry` - radius from rate, tangent length, domain-checked inverse trig
//!
//! Every solver returns either a complete result record or exactly one
//! [`TrajectoryError`]; no partially filled records and no NaN.

pub mod error;
pub mod geometry;
pub mod horizontal;
pub mod j_profile;
pub mod s_profile;

pub use error::{TrajectoryError, TrajectoryResult};
pub use horizontal::{solve_horizontal_profile, HorizontalProfileSolver};
pub use j_profile::{solve_j_profile, JProfileSolver};
pub use s_profile::{solve_s_profile, SProfileSolver};

use crate::types::{ProfileInput, ProfileResult, UnitSystem};
use tracing::debug;

/// One profile shape's solver: `solve(input, units) -> result or error`.
///
/// Implementations are stateless unit structs, so they are `Send + Sync` and
/// can be shared freely across threads.
pub trait ProfileSolver {
    type Input;
    type Output;

    fn solve(&self, input: &Self::Input, units: UnitSystem) -> TrajectoryResult<Self::Output>;
}

/// Dispatch any profile input to its solver.
pub fn solve(input: &ProfileInput, units: UnitSystem) -> TrajectoryResult<ProfileResult> {
    let result = match input {
        ProfileInput::J(i) => JProfileSolver.solve(i, units).map(ProfileResult::J),
        ProfileInput::S(i) => SProfileSolver.solve(i, units).map(ProfileResult::S),
        ProfileInput::Horizontal(i) => HorizontalProfileSolver
            .solve(i, units)
            .map(ProfileResult::Horizontal),
    };

    match &result {
        Ok(r) => debug!(
            profile = %input.kind(),
            %units,
            theta = r.inclination(),
            md_total = r.md_total(),
            "Profile solved"
        ),
        Err(e) => debug!(profile = %input.kind(), %units, error = %e, "Profile rejected"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HorizontalProfileInput, JProfileInput, ProfileKind, SProfileInput};

    #[test]
    fn test_dispatch_matches_direct_solvers() {
        let j = JProfileInput { tvd: 8000.0, kop: 500.0, bur: 2.0, dh: 970.8 };
        let s = SProfileInput { tvd: 12000.0, kop: 6084.0, bur: 3.0, dor: 2.0, dh: 3500.0 };
        let h = HorizontalProfileInput { tvd: 10000.0, kop: 5000.0, bur1: 10.0, bur2: 8.0, dh: 3000.0 };

        assert_eq!(
            solve(&j.into(), UnitSystem::Field).unwrap(),
            ProfileResult::J(solve_j_profile(&j, UnitSystem::Field).unwrap())
        );
        assert_eq!(
            solve(&s.into(), UnitSystem::Field).unwrap(),
            ProfileResult::S(solve_s_profile(&s, UnitSystem::Field).unwrap())
        );
        let hr = solve(&h.into(), UnitSystem::Field).unwrap();
        assert_eq!(hr.kind(), ProfileKind::Horizontal);
    }

    #[test]
    fn test_solvers_are_deterministic() {
        let s: ProfileInput = SProfileInput { tvd: 12000.0, kop: 6084.0, bur: 3.0, dor: 2.0, dh: 3500.0 }.into();
        let a = solve(&s, UnitSystem::Metric).unwrap();
        let b = solve(&s, UnitSystem::Metric).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_results_never_contain_nan() {
        // Sweep displacements across feasible and infeasible regions
        for step in 0..200 {
            let dh = step as f64 * 50.0;
            let input: ProfileInput = JProfileInput { tvd: 8000.0, kop: 500.0, bur: 2.0, dh }.into();
            if let Ok(r) = solve(&input, UnitSystem::Field) {
                assert!(r.entries().iter().all(|e| e.value.is_finite()), "dh={dh}");
            }
        }
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_solvers_are_thread_safe() {
        assert_send_sync::<JProfileSolver>();
        assert_send_sync::<SProfileSolver>();
        assert_send_sync::<HorizontalProfileSolver>();
        assert_send_sync::<ProfileResult>();
    }
}
