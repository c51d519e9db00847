//! Domain error types

use thiserror::Error;

/// Error when a notification id entered at the screen boundary is not an integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid notification id: \"{input}\". Expected a 32-bit integer")]
pub struct InvalidIdFormat {
    pub input: String,
}

/// Error when a channel identifier does not name a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown channel: \"{input}\". Valid channels are: MIN_PRIORITY, LOW_PRIORITY, DEFAULT_PRIORITY, HIGH_PRIORITY")]
pub struct UnknownChannelIdentifier {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
