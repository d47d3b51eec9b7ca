//! Registry loading functionality.
//!
//! This module provides the [`RegistryLoader`] type for loading shift-code
//! definitions from a YAML file into a [`ShiftRegistry`].

use chrono::NaiveTime;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftDefinition;

use super::ShiftRegistry;
use super::types::{RawCodeEntry, RegistryFile};

/// Loads shift-code registries from disk.
///
/// The loader reads `shiftcodes.yaml` from a configuration directory and
/// merges its entries over the builtin non-timed codes, so a file entry for
/// `bijs` or `fdrecup` replaces the builtin definition.
///
/// # Directory Structure
///
/// ```text
/// config/skc/
/// └── shiftcodes.yaml   # code -> { label, start, end, break_minutes, non_timed }
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_calendar_engine::registry::RegistryLoader;
///
/// let registry = RegistryLoader::load("./config/skc").unwrap();
/// let day_shift = registry.lookup("d").unwrap();
/// println!("d = {}", day_shift.label);
/// ```
#[derive(Debug, Clone)]
pub struct RegistryLoader;

impl RegistryLoader {
    /// Loads a registry from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. `"./config/skc"`)
    ///
    /// # Returns
    ///
    /// Returns the loaded [`ShiftRegistry`] on success, or an error if:
    /// - `shiftcodes.yaml` is missing
    /// - the file contains invalid YAML
    /// - a `start`/`end` value is not a valid `HH:MM` time
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ShiftRegistry> {
        let file_path = path.as_ref().join("shiftcodes.yaml");
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: RegistryFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let mut registry = ShiftRegistry::with_builtins();
        for (code, entry) in &file.codes {
            let definition = Self::convert_entry(code, entry, &path_str)?;
            registry.insert(code, definition);
        }

        Ok(registry)
    }

    /// Converts a raw file entry into a [`ShiftDefinition`].
    fn convert_entry(
        code: &str,
        entry: &RawCodeEntry,
        path: &str,
    ) -> EngineResult<ShiftDefinition> {
        if entry.non_timed {
            return Ok(ShiftDefinition::non_timed(entry.label.clone()));
        }

        let start = Self::parse_time(code, entry.start.as_deref(), path)?;
        let end = Self::parse_time(code, entry.end.as_deref(), path)?;

        Ok(ShiftDefinition::timed(
            entry.label.clone(),
            start,
            end,
            entry.break_minutes,
        ))
    }

    /// Parses an optional `HH:MM` string.
    fn parse_time(code: &str, value: Option<&str>, path: &str) -> EngineResult<Option<NaiveTime>> {
        match value {
            None => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M").map(Some).map_err(|_| {
                EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("code '{}': invalid time '{}', expected HH:MM", code, s),
                }
            }),
        }
    }
}
