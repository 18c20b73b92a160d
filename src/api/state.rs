//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::engine::PayrollEngine;

/// Shared application state.
///
/// Carries the payroll engine; the engine itself is cheap to clone, so
/// the state is too.
#[derive(Clone)]
pub struct AppState {
    engine: PayrollEngine,
}

impl AppState {
    /// Creates a new application state with the given engine.
    pub fn new(engine: PayrollEngine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the payroll engine.
    pub fn engine(&self) -> &PayrollEngine {
        &self.engine
    }
}
