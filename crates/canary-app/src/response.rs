// Rust guideline compliant 2026-10-19

//! JSON envelopes reporting a resolution outcome.
//!
//! Success carries the resolved ID under the same `canaryConfigId` key the
//! task publishes to the stage context. Failures carry a stable code and say
//! whether the caller's inputs, rather than the environment, are at fault.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Payload of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    /// The unique config ID the name resolved to.
    pub canary_config_id: String,
}

/// Envelope around a successful result.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Wraps an arbitrary payload.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

impl SuccessEnvelope<Resolved> {
    /// Wraps a resolved config ID.
    #[must_use]
    pub fn resolved(canary_config_id: impl Into<String>) -> Self {
        Self::new(Resolved {
            canary_config_id: canary_config_id.into(),
        })
    }
}

/// Envelope around a failed resolution or command.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Message naming the requested config and application where relevant.
    pub message: String,
    /// True when fixing the inputs or the catalog is the way forward.
    pub user_error: bool,
    /// Lookup inputs and matching IDs, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Builds the envelope for an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            user_error: error.is_user_error(),
            details: error.details(),
        }
    }
}
