//! Build-hold-drop ("S") profile
//!
//! Build arc (radius R1) from the kickoff point, straight tangent, then a drop
//! arc (radius R2) of opposite curvature returning to vertical at the target.
//! The two circle centres sit at (R1, KOP) and (DH - R2, TVD); the tangent is
//! the internal common tangent of the two circles.

use super::error::TrajectoryResult;
use super::geometry::{
    angle_from_sine, arc_length, atan_deg, check_inclination, cos_deg, radius_from_rate,
    require_non_negative, require_positive, sin_deg, tangent_length,
};
use super::ProfileSolver;
use crate::types::{SProfileInput, SProfileResult, UnitSystem};

/// Solver for [`SProfileInput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SProfileSolver;

impl ProfileSolver for SProfileSolver {
    type Input = SProfileInput;
    type Output = SProfileResult;

    fn solve(&self, input: &SProfileInput, units: UnitSystem) -> TrajectoryResult<SProfileResult> {
        solve_s_profile(input, units)
    }
}

/// Solve an S profile.
///
/// When `DH < R1 + R2` the drop centre lies back toward the well and the hold
/// angle is `transition - oblique`; when `DH > R1 + R2` it lies beyond and the
/// oblique angle adds. At equality the offset is zero and the two agree.
pub fn solve_s_profile(input: &SProfileInput, units: UnitSystem) -> TrajectoryResult<SProfileResult> {
    let constants = units.resolve();

    let build_radius = radius_from_rate(input.bur, constants.radius_constant, "BUR")?;
    let drop_radius = radius_from_rate(input.dor, constants.radius_constant, "DOR")?;
    let kop = require_non_negative("KOP", input.kop)?;
    let dh = require_non_negative("DH", input.dh)?;
    let vertical_run = require_positive("TVD - KOP", input.tvd - kop)?;

    let sum_radii = build_radius + drop_radius;
    let offset = if dh > sum_radii {
        dh - sum_radii
    } else if dh < sum_radii {
        build_radius - (dh - drop_radius)
    } else {
        0.0
    };

    let oblique_angle = atan_deg(offset, vertical_run);
    let oblique_hypotenuse = offset.hypot(vertical_run);
    let transition_angle = angle_from_sine(
        sum_radii / oblique_hypotenuse,
        "R1 + R2 <= oblique hypotenuse",
    )?;

    let raw_inclination = if dh > sum_radii {
        transition_angle + oblique_angle
    } else {
        transition_angle - oblique_angle
    };
    let inclination = check_inclination(raw_inclination, "0 < theta < 90")?;

    let tvd_eob = kop + build_radius * sin_deg(inclination);
    let md_eob = kop + arc_length(inclination, input.bur, constants.arc_length_constant);
    let dh_eob = build_radius * (1.0 - cos_deg(inclination));

    let tangent = tangent_length(
        oblique_hypotenuse,
        sum_radii,
        "R1 + R2 <= oblique hypotenuse",
    )?;

    let md_sod = md_eob + tangent;
    let tvd_sod = tvd_eob + tangent * cos_deg(inclination);
    let dh_sod = dh_eob + tangent * sin_deg(inclination);
    let md_total = md_sod + arc_length(inclination, input.dor, constants.arc_length_constant);

    Ok(SProfileResult {
        build_radius,
        drop_radius,
        inclination,
        tvd_eob,
        md_eob,
        dh_eob,
        tangent_length: tangent,
        md_sod,
        tvd_sod,
        dh_sod,
        md_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::TrajectoryError;

    fn example_input() -> SProfileInput {
        SProfileInput {
            tvd: 12000.0,
            kop: 6084.0,
            bur: 3.0,
            dor: 2.0,
            dh: 3500.0,
        }
    }

    /// End of the drop arc, which should coincide with the target.
    fn end_of_drop(r: &SProfileResult) -> (f64, f64) {
        let tvd = r.tvd_sod + r.drop_radius * sin_deg(r.inclination);
        let dh = r.dh_sod + r.drop_radius * (1.0 - cos_deg(r.inclination));
        (tvd, dh)
    }

    #[test]
    fn test_field_example() {
        let r = solve_s_profile(&example_input(), UnitSystem::Field).unwrap();

        assert!((r.build_radius - 1909.86).abs() < 1e-6);
        assert!((r.drop_radius - 2864.79).abs() < 1e-6);
        assert!((r.inclination - 39.9303).abs() < 1e-3, "theta = {}", r.inclination);
        assert!((r.md_eob - 7415.010).abs() < 1e-2);
        assert!((r.tangent_length - 3718.401).abs() < 1e-2);
        assert!((r.md_sod - 11133.411).abs() < 1e-2);
        assert!((r.md_total - 13129.926).abs() < 1e-2, "MD_total = {}", r.md_total);
        assert!(r.md_total > r.md_sod && r.md_sod > r.md_eob && r.md_eob > 6084.0);
    }

    #[test]
    fn test_md_total_is_sum_of_sections() {
        let input = example_input();
        let r = solve_s_profile(&input, UnitSystem::Field).unwrap();
        let build = r.inclination / input.bur * 100.0;
        let drop = r.inclination / input.dor * 100.0;
        let expected = input.kop + build + r.tangent_length + drop;
        assert!((r.md_total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_closes_on_target_both_branches() {
        for dh in [3500.0, 8000.0] {
            let input = SProfileInput { dh, ..example_input() };
            let r = solve_s_profile(&input, UnitSystem::Field).unwrap();
            let (tvd, end_dh) = end_of_drop(&r);
            assert!((tvd - input.tvd).abs() < 1e-6, "dh={dh}: tvd {tvd}");
            assert!((end_dh - dh).abs() < 1e-6, "dh={dh}: end dh {end_dh}");
        }
    }

    #[test]
    fn test_displacement_equal_to_radius_sum() {
        let sum = 5729.58 / 3.0 + 5729.58 / 2.0;
        let at = |dh: f64| {
            solve_s_profile(&SProfileInput { dh, ..example_input() }, UnitSystem::Field)
                .unwrap()
                .inclination
        };
        let equal = at(sum);
        assert!((at(sum - 1e-6) - equal).abs() < 1e-6);
        assert!((at(sum + 1e-6) - equal).abs() < 1e-6);
        assert!((equal - 53.811).abs() < 1e-2, "theta = {equal}");
    }

    #[test]
    fn test_zero_drop_rate() {
        let input = SProfileInput { dor: 0.0, ..example_input() };
        let err = solve_s_profile(&input, UnitSystem::Field).unwrap_err();
        assert_eq!(err, TrajectoryError::InvalidRate { field: "DOR", value: 0.0 });
    }

    #[test]
    fn test_radii_too_large_for_vertical_run() {
        // 0.5°/100ft rates give radii far larger than the 1000 ft vertical run
        let input = SProfileInput {
            tvd: 2000.0,
            kop: 1000.0,
            bur: 0.5,
            dor: 0.5,
            dh: 500.0,
        };
        let err = solve_s_profile(&input, UnitSystem::Field).unwrap_err();
        match err {
            TrajectoryError::InfeasibleGeometry { constraint, .. } => {
                assert_eq!(constraint, "R1 + R2 <= oblique hypotenuse");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_metric_closes_on_target() {
        let input = SProfileInput {
            tvd: 3600.0,
            kop: 1800.0,
            bur: 3.0,
            dor: 2.0,
            dh: 1000.0,
        };
        let r = solve_s_profile(&input, UnitSystem::Metric).unwrap();
        assert!((r.inclination - 37.185).abs() < 1e-2);
        let (tvd, dh) = end_of_drop(&r);
        assert!((tvd - 3600.0).abs() < 1e-6);
        assert!((dh - 1000.0).abs() < 1e-6);
    }
}
