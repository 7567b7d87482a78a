//! Error types and handling for the Pathfinder application

use thiserror::Error;

/// Main error type for the Pathfinder application
#[derive(Error, Debug)]
pub enum PathfinderError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Lookup of a named destination or trailhead failed
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl PathfinderError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PathfinderError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            PathfinderError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PathfinderError::NotFound { message } => {
                format!("Not found: {message}")
            }
            PathfinderError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            PathfinderError::General { message } => message.clone(),
        }
    }
}
