//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while describing drawing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A point style name did not match any known marker.
    #[error("unknown point style '{0}'")]
    UnknownPointStyle(String),

    /// A color string could not be parsed.
    #[error("invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
