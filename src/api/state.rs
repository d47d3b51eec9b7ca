//! Application state for the shift calendar API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::registry::ShiftRegistry;

/// Shared application state.
///
/// Holds the loaded shift-code registry. The registry is read-only during
/// request handling; edits happen between calculations, never concurrently
/// with one.
#[derive(Clone)]
pub struct AppState {
    /// The loaded shift-code registry.
    registry: Arc<ShiftRegistry>,
}

impl AppState {
    /// Creates a new application state with the given registry.
    pub fn new(registry: ShiftRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the shift-code registry.
    pub fn registry(&self) -> &ShiftRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_registry() {
        let state = AppState::new(ShiftRegistry::with_builtins());
        assert_eq!(state.registry().len(), 2);
    }
}
