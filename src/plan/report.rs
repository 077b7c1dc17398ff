//! Report rendering for solved wells.
//!
//! Text output is one `name -> value unit` line per result entry. JSON
//! output is an array with one object per well.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::batch::WellOutcome;
use crate::config::ReportConfig;
use crate::types::{ProfileKind, QuantityKind, UnitSystem};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders well outcomes for display or export.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub format: OutputFormat,
    pub decimals: usize,
    pub show_inputs: bool,
}

impl Report {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            format: config.format,
            decimals: config.decimals,
            show_inputs: config.show_inputs,
        }
    }

    /// Render all outcomes in the configured format.
    pub fn render(&self, wells: &[WellOutcome]) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text(wells)),
            OutputFormat::Json => self.render_json(wells),
        }
    }

    pub fn render_text(&self, wells: &[WellOutcome]) -> String {
        let mut out = String::new();
        for (i, well) in wells.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.write_text_well(&mut out, well);
        }
        out
    }

    fn write_text_well(&self, out: &mut String, well: &WellOutcome) {
        let d = self.decimals;
        // Writing into a String cannot fail
        let _ = writeln!(out, "[{}] {} profile ({})", well.name, well.input.kind(), well.units);

        if self.show_inputs {
            for (name, value) in well.input.fields() {
                let _ = writeln!(out, "  {name} = {value} {}", input_unit(name, well.units));
            }
        }

        match &well.result {
            Ok(result) => {
                for entry in result.entries() {
                    let unit = unit_label(entry.kind, well.units);
                    let _ = writeln!(out, "{} -> {:.d$} {}", entry.name, entry.value, unit);
                }
            }
            Err(e) => {
                let _ = writeln!(out, "error: {e}");
            }
        }
    }

    pub fn render_json(&self, wells: &[WellOutcome]) -> Result<String, serde_json::Error> {
        let records: Vec<JsonWell<'_>> = wells.iter().map(|w| self.json_well(w)).collect();
        serde_json::to_string_pretty(&records)
    }

    fn json_well<'a>(&self, well: &'a WellOutcome) -> JsonWell<'a> {
        let inputs = self.show_inputs.then(|| {
            well.input
                .fields()
                .into_iter()
                .map(|(name, value)| JsonField { name, value, unit: input_unit(name, well.units) })
                .collect()
        });

        let (entries, error) = match &well.result {
            Ok(result) => (
                result
                    .entries()
                    .into_iter()
                    .map(|e| JsonEntry { name: e.name, value: e.value, unit: unit_label(e.kind, well.units) })
                    .collect(),
                None,
            ),
            Err(e) => (Vec::new(), Some(JsonError { code: e.code(), message: e.to_string() })),
        };

        JsonWell {
            well: &well.name,
            profile: well.input.kind(),
            units: well.units,
            inputs,
            entries,
            error,
        }
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

fn unit_label(kind: QuantityKind, units: UnitSystem) -> &'static str {
    match kind {
        QuantityKind::Angle => "degrees",
        QuantityKind::Length => units.length_unit(),
    }
}

fn input_unit(field: &str, units: UnitSystem) -> &'static str {
    match field {
        "bur" | "bur1" | "bur2" | "dor" => units.rate_unit(),
        _ => units.length_unit(),
    }
}

#[derive(Serialize)]
struct JsonWell<'a> {
    well: &'a str,
    profile: ProfileKind,
    units: UnitSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    inputs: Option<Vec<JsonField>>,
    entries: Vec<JsonEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonField {
    name: &'static str,
    value: f64,
    unit: &'static str,
}

#[derive(Serialize)]
struct JsonEntry {
    name: &'static str,
    value: f64,
    unit: &'static str,
}

#[derive(Serialize)]
struct JsonError {
    code: &'static str,
    message: String,
}
