// Rust guideline compliant 2026-10-19

//! Error types for the canary core library.

use thiserror::Error;

/// Result type alias for canary operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for canary operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A catalog snapshot line could not be parsed.
    #[error("Invalid catalog at line {line}: {message}")]
    InvalidCatalog {
        /// 1-based line number in the snapshot file.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// No canary config matched the name and application.
    #[error(
        "Couldn't find a canary configId for configName {} and application {}",
        display_name(.config_name),
        .application
    )]
    NotFound {
        /// Requested config name, if the caller supplied one.
        config_name: Option<String>,
        /// Application the lookup was scoped to.
        application: String,
    },

    /// More than one canary config matched the name and application.
    #[error(
        "Found more than one canary configId for configName {} and application {}",
        display_name(.config_name),
        .application
    )]
    Ambiguous {
        /// Requested config name, if the caller supplied one.
        config_name: Option<String>,
        /// Application the lookup was scoped to.
        application: String,
        /// IDs of every matching record, in catalog order.
        matches: Vec<String>,
    },
}

impl Error {
    /// Returns true for errors caused by the caller's input data rather than
    /// by the environment.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::Ambiguous { .. })
    }
}

fn display_name(config_name: &Option<String>) -> &str {
    config_name.as_deref().unwrap_or("null")
}
