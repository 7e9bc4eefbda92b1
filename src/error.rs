//! Error types for Latin analysis
//!
//! The numeral and stemming core never fails: malformed numerals and
//! unstemmable words degrade to the original token. Errors only arise on the
//! configuration surface (factories, registry, analyzer configuration) and
//! when the stem alternator is driven out of order.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Main error type for analysis configuration and filter wiring
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No factory is registered under the requested name
    #[error("Unknown filter '{name}'")]
    UnknownFilter { name: String },

    /// A factory with this name is already registered
    #[error("Filter '{name}' is already registered")]
    DuplicateFilter { name: String },

    /// A filter argument could not be interpreted
    #[error("Invalid value '{value}' for parameter '{parameter}' of filter '{filter}': expected {expected}")]
    InvalidParameter {
        filter: String,
        parameter: String,
        value: String,
        expected: String,
    },

    /// Arguments were supplied that the filter does not understand
    #[error("Unknown parameters for filter '{filter}': {}", .names.join(", "))]
    UnknownParameters { filter: String, names: Vec<String> },

    /// A new word was fed to the stem alternator before both readings were emitted
    #[error("Cannot start stemming '{word}' while readings of the previous word are pending")]
    ReadingsPending { word: String },

    /// Analyzer configuration could not be deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Returns the filter name this error refers to, if any
    pub fn filter_name(&self) -> Option<&str> {
        match self {
            AnalysisError::UnknownFilter { name } | AnalysisError::DuplicateFilter { name } => {
                Some(name)
            }
            AnalysisError::InvalidParameter { filter, .. }
            | AnalysisError::UnknownParameters { filter, .. } => Some(filter),
            AnalysisError::ReadingsPending { .. } | AnalysisError::Config(_) => None,
        }
    }

    /// Returns true if the error was caused by the configuration surface
    pub fn is_config_error(&self) -> bool {
        !matches!(self, AnalysisError::ReadingsPending { .. })
    }
}
