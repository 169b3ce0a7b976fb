//! Error types for slider construction.

use thiserror::Error;

/// Errors surfaced when a slider cannot be built.
#[derive(Debug, Error)]
pub enum SliderError {
    /// The container has no panels to rotate through.
    #[error("slider requires at least one panel")]
    NoPanels,

    /// Autoplay interval of zero milliseconds.
    #[error("speed must be a positive number of milliseconds")]
    InvalidSpeed,

    /// Options JSON could not be parsed.
    #[error("invalid slider options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SliderError>;
