//! Well-profile input and output records
//!
//! Inputs are plain depth/rate records, one per profile shape. Outputs are
//! typed structs that also flatten into an ordered list of [`ResultEntry`]
//! values for display and export.

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Kind
// ============================================================================

/// The three canonical vertical-section well shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Build and hold
    J,
    /// Build, hold and drop
    S,
    /// Build, hold and build to 90°
    Horizontal,
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileKind::J => write!(f, "J"),
            ProfileKind::S => write!(f, "S"),
            ProfileKind::Horizontal => write!(f, "Horizontal"),
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Build-and-hold ("J") profile inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JProfileInput {
    /// True vertical depth of the target
    pub tvd: f64,
    /// Kickoff point depth
    pub kop: f64,
    /// Build rate
    pub bur: f64,
    /// Target horizontal displacement
    pub dh: f64,
}

/// Build-hold-drop ("S") profile inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SProfileInput {
    pub tvd: f64,
    pub kop: f64,
    /// Build rate
    pub bur: f64,
    /// Drop rate
    pub dor: f64,
    pub dh: f64,
}

/// Build-hold-build profile inputs, landing at 90° inclination.
///
/// `dh` is the horizontal displacement of the landing point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalProfileInput {
    pub tvd: f64,
    pub kop: f64,
    /// First build rate
    pub bur1: f64,
    /// Second build rate
    pub bur2: f64,
    pub dh: f64,
}

/// Input for any profile shape, tagged by `profile` when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum ProfileInput {
    J(JProfileInput),
    S(SProfileInput),
    Horizontal(HorizontalProfileInput),
}

impl ProfileInput {
    pub fn kind(&self) -> ProfileKind {
        match self {
            ProfileInput::J(_) => ProfileKind::J,
            ProfileInput::S(_) => ProfileKind::S,
            ProfileInput::Horizontal(_) => ProfileKind::Horizontal,
        }
    }

    /// Kickoff point depth, shared by all shapes.
    pub fn kop(&self) -> f64 {
        match self {
            ProfileInput::J(i) => i.kop,
            ProfileInput::S(i) => i.kop,
            ProfileInput::Horizontal(i) => i.kop,
        }
    }

    /// Input fields in declaration order, for echoing alongside a result.
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        match self {
            ProfileInput::J(i) => vec![("tvd", i.tvd), ("kop", i.kop), ("bur", i.bur), ("dh", i.dh)],
            ProfileInput::S(i) => vec![
                ("tvd", i.tvd),
                ("kop", i.kop),
                ("bur", i.bur),
                ("dor", i.dor),
                ("dh", i.dh),
            ],
            ProfileInput::Horizontal(i) => vec![
                ("tvd", i.tvd),
                ("kop", i.kop),
                ("bur1", i.bur1),
                ("bur2", i.bur2),
                ("dh", i.dh),
            ],
        }
    }
}

impl From<JProfileInput> for ProfileInput {
    fn from(input: JProfileInput) -> Self {
        ProfileInput::J(input)
    }
}

impl From<SProfileInput> for ProfileInput {
    fn from(input: SProfileInput) -> Self {
        ProfileInput::S(input)
    }
}

impl From<HorizontalProfileInput> for ProfileInput {
    fn from(input: HorizontalProfileInput) -> Self {
        ProfileInput::Horizontal(input)
    }
}

// ============================================================================
// Result Entries
// ============================================================================

/// Whether a result value is an angle or a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// Degrees
    Angle,
    /// Caller's length unit
    Length,
}

/// One named value of a solved profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultEntry {
    pub name: &'static str,
    pub value: f64,
    pub kind: QuantityKind,
}

impl ResultEntry {
    fn angle(name: &'static str, value: f64) -> Self {
        Self { name, value, kind: QuantityKind::Angle }
    }

    fn length(name: &'static str, value: f64) -> Self {
        Self { name, value, kind: QuantityKind::Length }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Solved J profile. EOB = end of build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JProfileResult {
    /// Build radius of curvature
    pub radius: f64,
    /// Hold inclination (degrees)
    pub inclination: f64,
    pub tvd_eob: f64,
    pub md_eob: f64,
    pub dh_eob: f64,
    pub tangent_length: f64,
    pub md_total: f64,
}

impl JProfileResult {
    pub fn entries(&self) -> Vec<ResultEntry> {
        vec![
            ResultEntry::length("R", self.radius),
            ResultEntry::angle("theta", self.inclination),
            ResultEntry::length("TVD_EOB", self.tvd_eob),
            ResultEntry::length("MD_EOB", self.md_eob),
            ResultEntry::length("DH_EOB", self.dh_eob),
            ResultEntry::length("tangent_length", self.tangent_length),
            ResultEntry::length("MD_total", self.md_total),
        ]
    }
}

/// Solved S profile. SOD = start of drop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SProfileResult {
    pub build_radius: f64,
    pub drop_radius: f64,
    pub inclination: f64,
    pub tvd_eob: f64,
    pub md_eob: f64,
    pub dh_eob: f64,
    pub tangent_length: f64,
    pub md_sod: f64,
    pub tvd_sod: f64,
    pub dh_sod: f64,
    pub md_total: f64,
}

impl SProfileResult {
    pub fn entries(&self) -> Vec<ResultEntry> {
        vec![
            ResultEntry::length("R1", self.build_radius),
            ResultEntry::length("R2", self.drop_radius),
            ResultEntry::angle("theta", self.inclination),
            ResultEntry::length("TVD_EOB", self.tvd_eob),
            ResultEntry::length("MD_EOB", self.md_eob),
            ResultEntry::length("DH_EOB", self.dh_eob),
            ResultEntry::length("tangent_length", self.tangent_length),
            ResultEntry::length("MD_SOD", self.md_sod),
            ResultEntry::length("TVD_SOD", self.tvd_sod),
            ResultEntry::length("DH_SOD", self.dh_sod),
            ResultEntry::length("MD_total", self.md_total),
        ]
    }
}

/// Solved horizontal profile. EOB1 = end of first build, SOB2 = start of
/// second build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalProfileResult {
    pub first_radius: f64,
    pub second_radius: f64,
    pub inclination: f64,
    pub tvd_eob1: f64,
    pub md_eob1: f64,
    pub dh_eob1: f64,
    pub tangent_length: f64,
    pub md_sob2: f64,
    pub tvd_sob2: f64,
    pub dh_sob2: f64,
    pub md_total: f64,
}

impl HorizontalProfileResult {
    pub fn entries(&self) -> Vec<ResultEntry> {
        vec![
            ResultEntry::length("R1", self.first_radius),
            ResultEntry::length("R2", self.second_radius),
            ResultEntry::angle("theta", self.inclination),
            ResultEntry::length("TVD_EOB1", self.tvd_eob1),
            ResultEntry::length("MD_EOB1", self.md_eob1),
            ResultEntry::length("DH_EOB1", self.dh_eob1),
            ResultEntry::length("tangent_length", self.tangent_length),
            ResultEntry::length("MD_SOB2", self.md_sob2),
            ResultEntry::length("TVD_SOB2", self.tvd_sob2),
            ResultEntry::length("DH_SOB2", self.dh_sob2),
            ResultEntry::length("MD_total", self.md_total),
        ]
    }
}

/// Result for any profile shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum ProfileResult {
    J(JProfileResult),
    S(SProfileResult),
    Horizontal(HorizontalProfileResult),
}

impl ProfileResult {
    pub fn kind(&self) -> ProfileKind {
        match self {
            ProfileResult::J(_) => ProfileKind::J,
            ProfileResult::S(_) => ProfileKind::S,
            ProfileResult::Horizontal(_) => ProfileKind::Horizontal,
        }
    }

    /// Ordered (name, value, kind) entries.
    pub fn entries(&self) -> Vec<ResultEntry> {
        match self {
            ProfileResult::J(r) => r.entries(),
            ProfileResult::S(r) => r.entries(),
            ProfileResult::Horizontal(r) => r.entries(),
        }
    }

    pub fn inclination(&self) -> f64 {
        match self {
            ProfileResult::J(r) => r.inclination,
            ProfileResult::S(r) => r.inclination,
            ProfileResult::Horizontal(r) => r.inclination,
        }
    }

    pub fn md_total(&self) -> f64 {
        match self {
            ProfileResult::J(r) => r.md_total,
            ProfileResult::S(r) => r.md_total,
            ProfileResult::Horizontal(r) => r.md_total,
        }
    }
}
