//! Error types for the Payroll Simulation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rule sets or
//! running a simulation.

use thiserror::Error;

/// The main error type for the Payroll Simulation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedCountry {
///     country: "France".to_string(),
/// };
/// assert_eq!(error.to_string(), "No payroll rules available for country 'France'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A request field was missing, malformed or out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The request field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No rule set is registered for the requested country.
    #[error("No payroll rules available for country '{country}'")]
    UnsupportedCountry {
        /// The country value exactly as the caller supplied it.
        country: String,
    },

    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule set violated one of its structural invariants.
    #[error("Invalid rule set for '{country}': {message}")]
    InvalidRuleSet {
        /// The country whose rule set is invalid.
        country: String,
        /// A description of the violated invariant.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true when the error can be fixed by the caller correcting the request.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput { .. } | EngineError::UnsupportedCountry { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
