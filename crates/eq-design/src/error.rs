//! Error handling for the eq-design command-line tool
//!
//! The core designer never validates its input; every check a user can trip
//! over lives here.

use thiserror::Error;

/// A specialized Result type for eq-design operations
pub type Result<T> = std::result::Result<T, DesignError>;

/// Errors reported before or after a design call
#[derive(Debug, Error)]
pub enum DesignError {
    /// A numeric argument is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Argument name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Quality factor is zero or negative.
    #[error("q must be positive, got {0}")]
    InvalidQ(f64),

    /// Linear gain is zero or negative.
    #[error("gain must be positive (linear), got {0}")]
    InvalidGain(f64),

    /// Normalized frequency outside the open interval (0, 1).
    #[error("normalized frequency {0} is outside (0, 1); pass --sample-rate for Hz")]
    FrequencyOutOfRange(f64),

    /// Sample rate is zero or negative.
    #[error("sample rate must be positive, got {0} Hz")]
    InvalidSampleRate(f64),

    /// Output format name not recognized.
    #[error("unknown output format `{0}` (expected text or json)")]
    UnknownFormat(String),

    /// JSON encoding failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
