//! Error types for glyph configuration.
//!
//! Geometry and hit-testing never fail; only loading or overriding style
//! configuration can.

use horizon_boxplot_render::RenderError;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building glyph styles.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// TOML style configuration could not be parsed.
    #[error("invalid TOML style configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON style configuration could not be parsed.
    #[error("invalid JSON style configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A color or point style string was malformed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A style option name is not recognized.
    #[error("unknown style option '{0}'")]
    UnknownOption(String),

    /// A numeric style option could not be parsed.
    #[error("invalid value '{value}' for style option '{option}'")]
    InvalidValue { option: String, value: String },
}

impl Error {
    /// Create an invalid value error.
    pub fn invalid_value(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            option: option.into(),
            value: value.into(),
        }
    }
}
