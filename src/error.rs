//! Error types for the yojana voice pipeline

use thiserror::Error;

/// Result type alias for voice pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the voice pipeline
///
/// None of these are fatal to the host application: capability errors
/// degrade to text input, playback errors reset the session, and
/// configuration rejections are retried internally against the locale's
/// fallback candidates before ever reaching a caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The platform lacks a speech capability entirely (capture or synthesis)
    #[error("unsupported capability: {0}")]
    UnsupportedCapability(String),

    /// Speech capture was blocked by the user or platform
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Any other capture error, surfaced verbatim
    #[error("recognition error: {0}")]
    Recognition(String),

    /// Synthesis reported an error mid-utterance
    #[error("playback failure: {0}")]
    PlaybackFailure(String),

    /// An invalid locale or voice assignment was rejected by the platform
    #[error("configuration rejected: {0}")]
    ConfigurationRejected(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
