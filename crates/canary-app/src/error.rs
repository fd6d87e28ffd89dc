// Rust guideline compliant 2026-10-19

//! Error handling for canary application services.

use canary_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for step and command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No canary config matched the name and application.
    NotFound,
    /// More than one canary config matched the name and application.
    AmbiguousConfig,
    /// The request included invalid inputs.
    InvalidInput,
    /// Resolver configuration is invalid.
    InvalidConfig,
    /// The catalog snapshot could not be parsed.
    InvalidCatalog,
    /// IO failure while reading a snapshot or config.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error not represented by core errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Json(_) => ErrorCode::JsonError,
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => ErrorCode::NotFound,
                CoreError::Ambiguous { .. } => ErrorCode::AmbiguousConfig,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::InvalidCatalog { .. } => ErrorCode::InvalidCatalog,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns true if the error stems from user-supplied data and should be
    /// shown to the user as-is.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        match self {
            AppError::InvalidInput(_) => true,
            AppError::Core(core) => core.is_user_error(),
            AppError::Io(_) | AppError::Json(_) => false,
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::NotFound {
                config_name,
                application,
            }) => Some(serde_json::json!({
                "configName": config_name,
                "application": application,
            })),
            AppError::Core(CoreError::Ambiguous {
                config_name,
                application,
                matches,
            }) => Some(serde_json::json!({
                "configName": config_name,
                "application": application,
                "matches": matches,
            })),
            AppError::Core(CoreError::InvalidCatalog { line, .. }) => Some(serde_json::json!({
                "line": line,
            })),
            _ => None,
        }
    }
}
