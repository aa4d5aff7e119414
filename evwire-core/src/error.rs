//! Unified error type for the wiring surface.
//!
//! The dispatch core itself defines no errors: registration cannot fail and
//! handler failures surface through the bus's own isolation. What can fail is
//! the configuration surface around it, and those paths use `Result<T, Self>`.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialization or deserialization error (e.g., JSON).
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A wiring entry names a handler the catalog does not know.
    #[error("Unknown handler '{name}' wired to event type '{event_type}'")]
    UnknownHandler { event_type: String, name: String },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    pub fn unknown_handler<S1: Into<String>, S2: Into<String>>(event_type: S1, name: S2) -> Self {
        Self::UnknownHandler {
            event_type: event_type.into(),
            name: name.into(),
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
