//! The shift-code registry.
//!
//! Maps short code strings (case-insensitive, whitespace-insensitive) to
//! [`ShiftDefinition`] values. The registry is the leaf component of the
//! engine: the calculation layer only reads from it, and a lookup miss means
//! "contributes zero hours" rather than an error.

mod loader;
mod types;

use std::collections::HashMap;

use crate::models::ShiftDefinition;

pub use loader::RegistryLoader;

/// Builtin code for the continuing-education marker.
pub const CODE_BIJS: &str = "bijs";
/// Builtin code for the paid-holiday-recovery marker.
pub const CODE_FDRECUP: &str = "fdrecup";

/// Normalizes a single code for storage and lookup: trimmed, lowercased,
/// all internal whitespace removed.
fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// An in-memory mapping from normalized shift code to its definition.
///
/// Definitions are created and edited by the surrounding session layer; the
/// calculation engine treats the registry as read-only during a pass.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::models::ShiftKind;
/// use shift_calendar_engine::registry::ShiftRegistry;
///
/// let registry = ShiftRegistry::with_builtins();
/// let bijs = registry.lookup(" BIJS ").unwrap();
/// assert_eq!(bijs.kind, ShiftKind::NonTimed);
/// assert!(registry.lookup("zz").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftRegistry {
    codes: HashMap<String, ShiftDefinition>,
}

impl ShiftRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-seeded with the two builtin non-timed codes:
    /// `bijs` (continuing education) and `fdrecup` (paid-holiday recovery).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(CODE_BIJS, ShiftDefinition::non_timed("Bijscholing"));
        registry.insert(CODE_FDRECUP, ShiftDefinition::non_timed("Betaalde feestdag"));
        registry
    }

    /// Inserts a definition under the normalized form of `code`, replacing
    /// any definition already stored there.
    pub fn insert(&mut self, code: &str, definition: ShiftDefinition) {
        self.codes.insert(normalize_code(code), definition);
    }

    /// Looks up a definition. The input is normalized before the lookup, so
    /// `"N10"`, `" n10 "` and `"n 10"` all resolve to the same entry.
    ///
    /// Returns `None` for unknown codes; callers treat that as a zero-hour
    /// contribution.
    pub fn lookup(&self, code: &str) -> Option<&ShiftDefinition> {
        self.codes.get(&normalize_code(code))
    }

    /// Returns the number of registered codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true when no codes are registered.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(normalized code, definition)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShiftDefinition)> {
        self.codes.iter().map(|(code, def)| (code.as_str(), def))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftKind;
    use chrono::NaiveTime;

    fn hm(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn test_builtins_are_seeded_non_timed() {
        let registry = ShiftRegistry::with_builtins();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("bijs").unwrap().kind, ShiftKind::NonTimed);
        assert_eq!(registry.lookup("fdrecup").unwrap().kind, ShiftKind::NonTimed);
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        let mut registry = ShiftRegistry::new();
        registry.insert("n10", ShiftDefinition::timed("Nachtdienst", hm(22, 0), hm(6, 0), 0));

        assert!(registry.lookup("N10").is_some());
        assert!(registry.lookup("  n10 ").is_some());
        assert!(registry.lookup("n 10").is_some());
        assert!(registry.lookup("n11").is_none());
    }

    #[test]
    fn test_insert_normalizes_key() {
        let mut registry = ShiftRegistry::new();
        registry.insert(" D ", ShiftDefinition::timed("Dagdienst", hm(7, 0), hm(15, 0), 0));
        assert!(registry.lookup("d").is_some());
    }

    #[test]
    fn test_insert_overwrites_existing_code() {
        let mut registry = ShiftRegistry::with_builtins();
        registry.insert("bijs", ShiftDefinition::timed("Bijscholing", hm(9, 0), hm(12, 0), 0));

        let def = registry.lookup("bijs").unwrap();
        assert!(def.kind.is_timed());
        // No duplicate entries under the same normalized code.
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_code_is_not_an_error() {
        let registry = ShiftRegistry::with_builtins();
        assert!(registry.lookup("zz").is_none());
    }
}
