//! Well plan files: a list of named wells, each with a profile shape and
//! optional unit override.
//!
//! ```toml
//! units = "field"
//!
//! [[well]]
//! name = "A-1"
//! profile = "j"
//! tvd = 8000.0
//! kop = 500.0
//! bur = 2.0
//! dh = 970.8
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::{ProfileInput, UnitSystem};

/// Plan loading errors
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to read plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Plan parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Plan contains no wells")]
    Empty,

    #[error("Duplicate well name '{0}'")]
    DuplicateName(String),
}

/// One well of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellPlan {
    pub name: String,

    /// Overrides the plan-level and configured unit system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitSystem>,

    #[serde(flatten)]
    pub input: ProfileInput,
}

/// A batch of wells loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitSystem>,

    #[serde(rename = "well", default)]
    pub wells: Vec<WellPlan>,
}

impl PlanFile {
    /// Read and validate a plan from disk.
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let plan = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), wells = plan.wells.len(), "Loaded well plan");
        Ok(plan)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, PlanError> {
        let plan: Self = toml::from_str(contents)?;
        plan.validate()?;
        Ok(plan)
    }

    /// A plan needs at least one well and unique well names.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.wells.is_empty() {
            return Err(PlanError::Empty);
        }
        let mut seen = HashSet::new();
        for well in &self.wells {
            if !seen.insert(well.name.as_str()) {
                return Err(PlanError::DuplicateName(well.name.clone()));
            }
        }
        Ok(())
    }

    /// Unit system for one well: well override, then plan, then `fallback`.
    pub fn units_for(&self, well: &WellPlan, fallback: UnitSystem) -> UnitSystem {
        well.units.or(self.units).unwrap_or(fallback)
    }
}
