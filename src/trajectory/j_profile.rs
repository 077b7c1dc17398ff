//! Build-and-hold ("J") profile
//!
//! A single circular build from the kickoff point, then a straight tangent to
//! the target. The build circle's centre sits at (R, KOP); the tangent runs
//! from the circle to the target at (DH, TVD).

use super::error::TrajectoryResult;
use super::geometry::{
    angle_from_cosine, arc_length, atan_deg, check_inclination, cos_deg, radius_from_rate,
    require_non_negative, require_positive, sin_deg, tangent_length,
};
use super::ProfileSolver;
use crate::types::{JProfileInput, JProfileResult, UnitSystem};

/// Solver for [`JProfileInput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JProfileSolver;

impl ProfileSolver for JProfileSolver {
    type Input = JProfileInput;
    type Output = JProfileResult;

    fn solve(&self, input: &JProfileInput, units: UnitSystem) -> TrajectoryResult<JProfileResult> {
        solve_j_profile(input, units)
    }
}

/// Solve a J profile.
///
/// Fails with `InvalidRate` for a non-positive build rate, `DegenerateInput`
/// when the target is not below the kickoff point, and `InfeasibleGeometry`
/// when the target lies inside the build circle or the hold angle falls
/// outside (0°, 90°).
pub fn solve_j_profile(input: &JProfileInput, units: UnitSystem) -> TrajectoryResult<JProfileResult> {
    let constants = units.resolve();

    let radius = radius_from_rate(input.bur, constants.radius_constant, "BUR")?;
    let kop = require_non_negative("KOP", input.kop)?;
    let dh = require_non_negative("DH", input.dh)?;
    let vertical_run = require_positive("TVD - KOP", input.tvd - kop)?;

    // Triangle between the build-circle centre and the target
    let horizontal_offset = (dh - radius).abs();
    let oblique_angle = atan_deg(horizontal_offset, vertical_run);
    let oblique_hypotenuse = horizontal_offset.hypot(vertical_run);
    let base_angle = angle_from_cosine(radius / oblique_hypotenuse, "R <= oblique hypotenuse")?;

    // Target left of the centre opens the oblique angle the other way.
    // At R == DH the offset is zero and both branches reduce to base_angle.
    let combined_angle = if radius > dh {
        base_angle + oblique_angle
    } else if radius < dh {
        base_angle - oblique_angle
    } else {
        base_angle
    };

    let inclination = check_inclination(90.0 - combined_angle, "0 < theta < 90")?;

    let tvd_eob = kop + radius * sin_deg(inclination);
    let md_eob = kop + arc_length(inclination, input.bur, constants.arc_length_constant);
    let dh_eob = radius * (1.0 - cos_deg(inclination));

    let tangent = tangent_length(oblique_hypotenuse, radius, "R <= oblique hypotenuse")?;

    Ok(JProfileResult {
        radius,
        inclination,
        tvd_eob,
        md_eob,
        dh_eob,
        tangent_length: tangent,
        md_total: md_eob + tangent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::TrajectoryError;

    fn example_input() -> JProfileInput {
        JProfileInput {
            tvd: 8000.0,
            kop: 500.0,
            bur: 2.0,
            dh: 970.8,
        }
    }

    #[test]
    fn test_field_example() {
        let r = solve_j_profile(&example_input(), UnitSystem::Field).unwrap();

        assert!((r.radius - 2864.79).abs() < 1e-6);
        assert!((r.inclination - 7.5642).abs() < 1e-3, "theta = {}", r.inclination);
        assert!((r.tvd_eob - 877.114).abs() < 1e-2, "TVD_EOB = {}", r.tvd_eob);
        assert!((r.md_eob - 878.212).abs() < 1e-2, "MD_EOB = {}", r.md_eob);
        assert!((r.dh_eob - 24.930).abs() < 1e-2, "DH_EOB = {}", r.dh_eob);
        assert!((r.tangent_length - 7185.414).abs() < 1e-2);
        assert!((r.md_total - 8063.626).abs() < 1e-2, "MD_total = {}", r.md_total);
    }

    #[test]
    fn test_metric_example() {
        let input = JProfileInput {
            tvd: 2500.0,
            kop: 300.0,
            bur: 3.0,
            dh: 400.0,
        };
        let r = solve_j_profile(&input, UnitSystem::Metric).unwrap();

        assert!((r.radius - 572.9567).abs() < 1e-3);
        assert!((r.inclination - 10.5532).abs() < 1e-3);
        assert!((r.md_total - 2536.643).abs() < 1e-2);
    }

    #[test]
    fn test_zero_build_rate_is_invalid_rate() {
        let input = JProfileInput { bur: 0.0, ..example_input() };
        let err = solve_j_profile(&input, UnitSystem::Field).unwrap_err();
        assert_eq!(err, TrajectoryError::InvalidRate { field: "BUR", value: 0.0 });
    }

    #[test]
    fn test_target_above_kickoff_is_degenerate() {
        let input = JProfileInput { tvd: 400.0, ..example_input() };
        let err = solve_j_profile(&input, UnitSystem::Field).unwrap_err();
        assert!(matches!(
            err,
            TrajectoryError::DegenerateInput { quantity: "TVD - KOP", .. }
        ));
    }

    #[test]
    fn test_shallow_far_target_needs_more_than_90_degrees() {
        let input = JProfileInput {
            tvd: 510.0,
            kop: 500.0,
            bur: 2.0,
            dh: 10_000.0,
        };
        let err = solve_j_profile(&input, UnitSystem::Field).unwrap_err();
        match err {
            TrajectoryError::InfeasibleGeometry { constraint, value } => {
                assert_eq!(constraint, "0 < theta < 90");
                assert!(value > 90.0, "theta = {value}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_target_inside_build_circle_is_infeasible() {
        // Target sits within R of the circle centre
        let input = JProfileInput {
            tvd: 1500.0,
            kop: 500.0,
            bur: 2.0,
            dh: 2000.0,
        };
        let err = solve_j_profile(&input, UnitSystem::Field).unwrap_err();
        match err {
            TrajectoryError::InfeasibleGeometry { constraint, value } => {
                assert_eq!(constraint, "R <= oblique hypotenuse");
                assert!(value > 1.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_continuity_at_radius_equals_displacement() {
        let radius = 5729.58 / 2.0;
        let at = |dh: f64| {
            solve_j_profile(&JProfileInput { dh, ..example_input() }, UnitSystem::Field)
                .unwrap()
                .inclination
        };
        let below = at(radius - 1e-6);
        let equal = at(radius);
        let above = at(radius + 1e-6);
        assert!((below - equal).abs() < 1e-6, "{below} vs {equal}");
        assert!((above - equal).abs() < 1e-6, "{above} vs {equal}");
    }
}
