//! Core error types for komposti using Railway-Oriented Programming.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::path::PathBuf;

use thiserror::Error;

/// The standard Result type for komposti operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for komposti operations.
#[derive(Debug, Error)]
pub enum Error {
    // Failure boundary
    #[error("{message}")]
    Thrown { message: String },

    #[error("panicked: {message}")]
    Panicked { message: String },

    // Configuration errors
    #[error("invalid value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("failed to read config file '{path}': {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    #[error("failed to parse config file '{path}': {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    // Logging
    #[error("failed to install tracing subscriber: {reason}")]
    TelemetryInit { reason: String },
}

impl Error {
    /// Create a thrown error carrying `message`.
    pub fn thrown(message: impl Into<String>) -> Self {
        Self::Thrown {
            message: message.into(),
        }
    }

    /// Create an error from a captured panic payload message.
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::Panicked {
            message: message.into(),
        }
    }

    /// Create a configuration validation error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a config read error.
    pub fn config_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a subscriber installation error.
    pub fn telemetry_init(reason: impl Into<String>) -> Self {
        Self::TelemetryInit {
            reason: reason.into(),
        }
    }

    /// The message carried by a thrown or panicked failure.
    ///
    /// Other variants return `None`; use `Display` for those.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Thrown { message } | Self::Panicked { message } => Some(message),
            _ => None,
        }
    }

    /// Whether this error was produced by `throw`.
    #[must_use]
    pub const fn is_thrown(&self) -> bool {
        matches!(self, Self::Thrown { .. })
    }
}
