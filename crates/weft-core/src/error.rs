//! Error types for configuration resolution

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for weft configuration resolution
#[derive(Debug, Error)]
pub enum WeftError {
    /// Malformed or root-escaping content pattern
    #[error("Invalid content pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Structural shape violation in the raw configuration
    #[error("Configuration error at '{path}': {message}")]
    ConfigValidation { path: String, message: String },

    /// Two sources declared a palette set with the same name
    #[error(
        "Duplicate palette set '{name}': declared by {first_source} and again by {second_source}"
    )]
    DuplicatePalette {
        name: String,
        first_source: String,
        second_source: String,
    },

    /// A plugin's fragment producer failed
    #[error("Plugin '{plugin}' failed: {source}")]
    Plugin {
        plugin: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Pattern,
    Config,
    Palette,
    Plugin,
    Io,
    Internal,
}

impl WeftError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeftError::InvalidPattern { .. } => ErrorKind::Pattern,
            WeftError::ConfigValidation { .. } => ErrorKind::Config,
            WeftError::DuplicatePalette { .. } => ErrorKind::Palette,
            WeftError::Plugin { .. } => ErrorKind::Plugin,
            WeftError::Io { .. } => ErrorKind::Io,
            WeftError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation error with the offending field path
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate palette error naming both contributing sources
    pub fn duplicate_palette(
        name: impl Into<String>,
        first_source: impl Into<String>,
        second_source: impl Into<String>,
    ) -> Self {
        Self::DuplicatePalette {
            name: name.into(),
            first_source: first_source.into(),
            second_source: second_source.into(),
        }
    }

    /// Create a plugin error wrapping the failing plugin's cause
    pub fn plugin(
        plugin: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Plugin {
            plugin: plugin.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for WeftError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}
