//! Error types for the sunlight calculation.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, SunlightError>;

/// Errors that can occur while preparing or running a sunlight computation.
#[derive(Error, Debug)]
pub enum SunlightError {
    /// A wall-clock string that is not `HH:MM`.
    #[error("invalid clock time {value:?} (expected HH:MM)")]
    InvalidClock {
        /// The string that failed to parse.
        value: String,
    },

    /// The city sunlight window is empty or inverted.
    #[error("dawn {dawn} must precede sunset {sunset}")]
    DawnNotBeforeSunset {
        /// The configured start of daylight.
        dawn: String,
        /// The configured end of daylight.
        sunset: String,
    },

    /// The outer shape of a city description is wrong.
    #[error("malformed city description: {0}")]
    Malformed(String),

    /// A neighbourhood or building record is missing a key or has the wrong type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
