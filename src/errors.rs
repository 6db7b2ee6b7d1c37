//! Error types for styletune
//!
//! The learning engine itself never fails; these errors only come from the
//! configuration layer around it.

use thiserror::Error;

/// Main error type for the styletune crate
#[derive(Error, Debug)]
pub enum TunerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Rate outside its permitted interval
    #[error("Invalid {name}: {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Generic errors with context
    #[error("Tuner error: {0}")]
    Generic(String),
}

/// Result type alias for styletune operations
pub type Result<T> = std::result::Result<T, TunerError>;

/// Convert anyhow errors to TunerError
impl From<anyhow::Error> for TunerError {
    fn from(err: anyhow::Error) -> Self {
        TunerError::Generic(err.to_string())
    }
}
