//! Raw serde types for the registry YAML file format.
//!
//! The on-disk format keeps times as `HH:MM` strings; [`super::RegistryLoader`]
//! parses them into [`crate::models::ShiftDefinition`] values.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level structure of `shiftcodes.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryFile {
    /// Map from raw code string to its entry. Keys are normalized on load.
    pub codes: BTreeMap<String, RawCodeEntry>,
}

/// One shift-code entry as written in the YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCodeEntry {
    /// Display label for the code.
    pub label: String,
    /// Start time as `HH:MM`, absent for codes without a start.
    #[serde(default)]
    pub start: Option<String>,
    /// End time as `HH:MM`, absent for codes without an end.
    #[serde(default)]
    pub end: Option<String>,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Marks a code that never contributes timed hours.
    #[serde(default)]
    pub non_timed: bool,
}
