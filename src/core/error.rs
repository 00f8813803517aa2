//! Core domain: error taxonomy shared by the game components.

use thiserror::Error;

/// Failures that degrade a single visual update. None of these are fatal:
/// callers log them and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MakeupError {
    /// Sprite key is not in the manifest, or its file is absent.
    #[error("sprite not found at path: {0}")]
    MissingAsset(String),

    #[error("sprite path is null or empty")]
    EmptyPath,

    /// A scene handle the component needs was never wired.
    #[error("{0} is missing")]
    InvalidReference(&'static str),

    /// An entry point received something it cannot act on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Error type for config and manifest loading failures.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load {file}: Parse error: {message}")]
    Parse { file: String, message: String },
}
