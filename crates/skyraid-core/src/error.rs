//! Error types shared across the workspace.

use thiserror::Error;

/// Failure loading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// The external loader reported an error instead of a model.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset failed to load: {0}")]
    LoadFailed(String),
}

/// Enemies could not be spawned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("base model has not been loaded yet")]
    AssetNotLoaded,

    #[error("session has been disposed")]
    Disposed,
}

/// Animation action switching failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimationError {
    #[error("no animation clip named `{0}`")]
    ClipNotFound(String),

    #[error("player model has not been loaded yet")]
    NotLoaded,

    #[error("session has been disposed")]
    Disposed,
}
