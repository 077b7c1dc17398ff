//! Measurement systems and the two constants every solver depends on

use serde::{Deserialize, Serialize};

/// Measurement system for depths and build/drop rates.
///
/// Field units express lengths in feet and rates in degrees per 100 ft;
/// metric units use metres and degrees per 30 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet, degrees per 100 ft
    #[default]
    #[serde(alias = "imperial", alias = "english", alias = "ingles")]
    #[value(aliases = ["imperial", "english", "ingles"])]
    Field,
    /// Metres, degrees per 30 m
    Metric,
}

/// Constants resolved from a [`UnitSystem`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConstants {
    /// Degree-length product turning a build rate into a radius: 360·L/(2π)
    pub radius_constant: f64,
    /// Reference course length L the rate is expressed over
    pub arc_length_constant: f64,
}

impl UnitSystem {
    /// Radius constant for field units (360 · 100 / 2π, as tabulated).
    pub const FIELD_RADIUS_CONSTANT: f64 = 5729.58;
    /// Radius constant for metric units (360 · 30 / 2π, as tabulated).
    pub const METRIC_RADIUS_CONSTANT: f64 = 1718.87;

    /// Resolve the radius and arc-length constants for this system.
    pub fn resolve(self) -> UnitConstants {
        match self {
            UnitSystem::Field => UnitConstants {
                radius_constant: Self::FIELD_RADIUS_CONSTANT,
                arc_length_constant: 100.0,
            },
            UnitSystem::Metric => UnitConstants {
                radius_constant: Self::METRIC_RADIUS_CONSTANT,
                arc_length_constant: 30.0,
            },
        }
    }

    /// Length unit label used in reports.
    pub fn length_unit(self) -> &'static str {
        match self {
            UnitSystem::Field => "ft",
            UnitSystem::Metric => "m",
        }
    }

    /// Build/drop rate unit label.
    pub fn rate_unit(self) -> &'static str {
        match self {
            UnitSystem::Field => "°/100ft",
            UnitSystem::Metric => "°/30m",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Field => write!(f, "field"),
            UnitSystem::Metric => write!(f, "metric"),
        }
    }
}
