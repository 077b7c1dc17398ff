//! Arc and triangle primitives shared by all profile solvers
//!
//! Every inverse-trigonometric or square-root evaluation in the solvers goes
//! through this module. Each primitive checks its domain first and returns a
//! typed error instead of letting NaN leak into a result. Angles in and out
//! are degrees.
//!
//! The `constraint` argument names the inequality the caller relies on
//! (e.g. `"R <= oblique hypotenuse"`) so a failure reports which geometric
//! condition broke, not just which primitive was called.

use super::error::{TrajectoryError, TrajectoryResult};

/// Radius of curvature for a build or drop rate.
///
/// `R = radius_constant / rate`, with `rate` in degrees per reference course
/// length. Rejects zero, negative and non-finite rates.
pub fn radius_from_rate(
    rate: f64,
    radius_constant: f64,
    field: &'static str,
) -> TrajectoryResult<f64> {
    if rate <= 0.0 || !rate.is_finite() {
        return Err(TrajectoryError::InvalidRate { field, value: rate });
    }
    Ok(radius_constant / rate)
}

/// Length of the tangent from a point to a circle (or between two circles):
/// `sqrt(hypotenuse² - leg²)`.
pub fn tangent_length(
    hypotenuse: f64,
    leg: f64,
    constraint: &'static str,
) -> TrajectoryResult<f64> {
    let leg = leg.abs();
    if hypotenuse < leg || hypotenuse.is_nan() || leg.is_nan() {
        return Err(TrajectoryError::infeasible(
            constraint,
            hypotenuse * hypotenuse - leg * leg,
        ));
    }
    Ok((hypotenuse * hypotenuse - leg * leg).sqrt())
}

/// `acos(x)` in degrees.
pub fn angle_from_cosine(x: f64, constraint: &'static str) -> TrajectoryResult<f64> {
    check_unit_interval(x, constraint)?;
    Ok(x.acos().to_degrees())
}

/// `asin(x)` in degrees.
pub fn angle_from_sine(x: f64, constraint: &'static str) -> TrajectoryResult<f64> {
    check_unit_interval(x, constraint)?;
    Ok(x.asin().to_degrees())
}

fn check_unit_interval(x: f64, constraint: &'static str) -> TrajectoryResult<()> {
    if (-1.0..=1.0).contains(&x) {
        Ok(())
    } else {
        Err(TrajectoryError::infeasible(constraint, x))
    }
}

/// `atan(opposite / adjacent)` in degrees. `adjacent` must already be
/// validated as non-zero by the caller.
pub fn atan_deg(opposite: f64, adjacent: f64) -> f64 {
    (opposite / adjacent).atan().to_degrees()
}

#[inline]
pub fn sin_deg(angle: f64) -> f64 {
    angle.to_radians().sin()
}

#[inline]
pub fn cos_deg(angle: f64) -> f64 {
    angle.to_radians().cos()
}

/// Reject legs and depths that must be strictly positive.
pub fn require_positive(quantity: &'static str, value: f64) -> TrajectoryResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(TrajectoryError::DegenerateInput { quantity, value })
    }
}

/// Reject negative or non-finite values that may legitimately be zero.
pub fn require_non_negative(quantity: &'static str, value: f64) -> TrajectoryResult<f64> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(TrajectoryError::DegenerateInput { quantity, value })
    }
}

/// Arc length along a section turning through `angle` degrees at `rate`
/// degrees per `arc_length_constant`.
#[inline]
pub fn arc_length(angle: f64, rate: f64, arc_length_constant: f64) -> f64 {
    angle / rate * arc_length_constant
}

/// Reject hold inclinations outside the open interval (0°, 90°).
pub fn check_inclination(theta: f64, constraint: &'static str) -> TrajectoryResult<f64> {
    if theta > 0.0 && theta < 90.0 {
        Ok(theta)
    } else {
        Err(TrajectoryError::infeasible(constraint, theta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD_K: f64 = 5729.58;

    #[test]
    fn test_radius_from_rate() {
        let r = radius_from_rate(2.0, FIELD_K, "bur").unwrap();
        assert!((r - 2864.79).abs() < 1e-9);
    }

    #[test]
    fn test_radius_strictly_decreasing_and_positive() {
        let rates = [0.01, 0.5, 1.0, 2.0, 3.5, 8.0, 15.0, 40.0];
        let radii: Vec<f64> = rates
            .iter()
            .map(|&r| radius_from_rate(r, FIELD_K, "bur").unwrap())
            .collect();
        assert!(radii.iter().all(|&r| r > 0.0));
        assert!(radii.windows(2).all(|w| w[0] > w[1]), "radii: {radii:?}");
    }

    #[test]
    fn test_radius_rejects_non_positive_rates() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = radius_from_rate(rate, FIELD_K, "bur").unwrap_err();
            assert!(
                matches!(err, TrajectoryError::InvalidRate { field: "bur", .. }),
                "rate {rate} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_tangent_length() {
        let t = tangent_length(5.0, 3.0, "leg <= hyp").unwrap();
        assert!((t - 4.0).abs() < 1e-12);
        // sign of the leg does not matter
        let t = tangent_length(5.0, -4.0, "leg <= hyp").unwrap();
        assert!((t - 3.0).abs() < 1e-12);
        assert_eq!(tangent_length(2.0, 2.0, "leg <= hyp").unwrap(), 0.0);
    }

    #[test]
    fn test_tangent_length_negative_radicand() {
        let err = tangent_length(3.0, 5.0, "leg <= hyp").unwrap_err();
        match err {
            TrajectoryError::InfeasibleGeometry { constraint, value } => {
                assert_eq!(constraint, "leg <= hyp");
                assert!(value < 0.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_inverse_trig_in_degrees() {
        assert!((angle_from_cosine(0.5, "c").unwrap() - 60.0).abs() < 1e-9);
        assert!((angle_from_sine(0.5, "s").unwrap() - 30.0).abs() < 1e-9);
        assert!((angle_from_cosine(-1.0, "c").unwrap() - 180.0).abs() < 1e-9);
        assert!((atan_deg(1.0, 1.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_trig_domain() {
        for x in [1.000_001, -1.5, f64::NAN] {
            assert!(angle_from_cosine(x, "c").is_err());
            assert!(angle_from_sine(x, "s").is_err());
        }
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("leg", 1.0).unwrap(), 1.0);
        assert!(require_positive("leg", 0.0).is_err());
        assert!(require_positive("leg", f64::NAN).is_err());
        assert!(require_non_negative("dh", 0.0).is_ok());
        assert!(require_non_negative("dh", -0.1).is_err());
    }

    #[test]
    fn test_check_inclination_open_interval() {
        assert!(check_inclination(45.0, "0 < theta < 90").is_ok());
        assert!(check_inclination(0.0, "0 < theta < 90").is_err());
        assert!(check_inclination(90.0, "0 < theta < 90").is_err());
    }
}
