//! Solver error taxonomy

use thiserror::Error;

/// Result alias for solver operations.
pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// A build or drop rate is not strictly positive.
    #[error("Invalid rate: {field} must be > 0, got {value}")]
    InvalidRate { field: &'static str, value: f64 },

    /// A depth or leg is negative, non-finite, or zero where it must be positive.
    #[error("Degenerate input: {quantity} is out of range, got {value:.3}")]
    DegenerateInput { quantity: &'static str, value: f64 },

    /// No circular-arc-plus-tangent trajectory satisfies the inputs.
    #[error("Infeasible geometry: {constraint} does not hold (value {value:.6})")]
    InfeasibleGeometry { constraint: String, value: f64 },
}

impl TrajectoryError {
    pub(crate) fn infeasible(constraint: impl Into<String>, value: f64) -> Self {
        TrajectoryError::InfeasibleGeometry {
            constraint: constraint.into(),
            value,
        }
    }

    /// Short machine-readable tag for logs and JSON reports.
    pub fn code(&self) -> &'static str {
        match self {
            TrajectoryError::InvalidRate { .. } => "invalid_rate",
            TrajectoryError::DegenerateInput { .. } => "degenerate_input",
            TrajectoryError::InfeasibleGeometry { .. } => "infeasible_geometry",
        }
    }
}
