//! Application state for the Payroll Simulation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RuleRegistry;

/// Shared application state.
///
/// Holds the rule registry, fully populated before the router is built and
/// never modified afterwards.
#[derive(Clone)]
pub struct AppState {
    /// The country rule registry.
    registry: Arc<RuleRegistry>,
}

impl AppState {
    /// Creates a new application state from a populated registry.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}
