//! Build-hold-build horizontal profile
//!
//! First build (R1) from the kickoff point to the hold angle, a straight
//! tangent, then a second build (R2) in the same sense that lands at 90°
//! inclination at depth TVD and displacement DH. The centres sit at (R1, KOP)
//! and (DH, TVD - R2); the tangent is their external common tangent.

use super::error::TrajectoryResult;
use super::geometry::{
    angle_from_cosine, arc_length, atan_deg, check_inclination, cos_deg, radius_from_rate,
    require_non_negative, require_positive, sin_deg, tangent_length,
};
use super::ProfileSolver;
use crate::types::{HorizontalProfileInput, HorizontalProfileResult, UnitSystem};

/// Solver for [`HorizontalProfileInput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalProfileSolver;

impl ProfileSolver for HorizontalProfileSolver {
    type Input = HorizontalProfileInput;
    type Output = HorizontalProfileResult;

    fn solve(
        &self,
        input: &HorizontalProfileInput,
        units: UnitSystem,
    ) -> TrajectoryResult<HorizontalProfileResult> {
        solve_horizontal_profile(input, units)
    }
}

/// Solve a horizontal profile.
pub fn solve_horizontal_profile(
    input: &HorizontalProfileInput,
    units: UnitSystem,
) -> TrajectoryResult<HorizontalProfileResult> {
    let constants = units.resolve();

    let first_radius = radius_from_rate(input.bur1, constants.radius_constant, "BUR1")?;
    let second_radius = radius_from_rate(input.bur2, constants.radius_constant, "BUR2")?;
    let kop = require_non_negative("KOP", input.kop)?;

    let vertical_leg = require_positive("(TVD - KOP) - R2", (input.tvd - kop) - second_radius)?;
    let horizontal_leg = require_positive("DH - R1", input.dh - first_radius)?;

    let oblique_angle = atan_deg(vertical_leg, horizontal_leg);
    let oblique_hypotenuse = vertical_leg.hypot(horizontal_leg);

    let radius_diff = first_radius - second_radius;
    let internal_angle = angle_from_cosine(
        radius_diff / oblique_hypotenuse,
        "|R1 - R2| <= oblique hypotenuse",
    )?;

    let inclination = check_inclination(180.0 - oblique_angle - internal_angle, "0 < theta < 90")?;

    let tvd_eob1 = kop + first_radius * sin_deg(inclination);
    let md_eob1 = kop + arc_length(inclination, input.bur1, constants.arc_length_constant);
    let dh_eob1 = first_radius * (1.0 - cos_deg(inclination));

    let tangent = tangent_length(
        oblique_hypotenuse,
        radius_diff,
        "|R1 - R2| <= oblique hypotenuse",
    )?;

    let md_sob2 = md_eob1 + tangent;
    let tvd_sob2 = tvd_eob1 + tangent * cos_deg(inclination);
    let dh_sob2 = dh_eob1 + tangent * sin_deg(inclination);
    let md_total = md_sob2 + arc_length(90.0 - inclination, input.bur2, constants.arc_length_constant);

    Ok(HorizontalProfileResult {
        first_radius,
        second_radius,
        inclination,
        tvd_eob1,
        md_eob1,
        dh_eob1,
        tangent_length: tangent,
        md_sob2,
        tvd_sob2,
        dh_sob2,
        md_total,
    })
}
