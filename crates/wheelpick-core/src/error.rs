//! Error types for picker construction and configuration.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} = {value} is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors reported when a picker is constructed or its item list replaced.
///
/// Normal interaction (pointer events, frames, programmatic selection)
/// never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PickerError {
    #[error("Item height must be a positive finite number, got {0}")]
    InvalidItemHeight(f64),
    #[error("A picker needs at least one item")]
    EmptyItems,
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Result type for picker operations.
pub type PickerResult<T> = Result<T, PickerError>;
