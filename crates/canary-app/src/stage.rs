// Rust guideline compliant 2026-10-19

//! Stage execution context and the typed-input adapter.
//!
//! Pipeline stages carry a loosely typed JSON context. Values are pulled out
//! here and checked against the type the resolver expects; nothing is coerced.

use crate::error::{AppError, Result};
use canary_core::ResolutionInput;
use serde::{Deserialize, Serialize};

/// JSON pointer to the config name inside a stage context.
pub const CANARY_CONFIG_NAME_POINTER: &str = "/canaryConfigName";

/// A pipeline stage as seen by a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageExecution {
    /// Application owning the pipeline execution.
    pub application: String,
    /// Stage context values.
    #[serde(default)]
    pub context: serde_json::Value,
}

impl StageExecution {
    /// Creates a stage with the given application and context.
    pub fn new(application: impl Into<String>, context: serde_json::Value) -> Self {
        Self {
            application: application.into(),
            context,
        }
    }

    /// Reads an optional string from the context.
    ///
    /// # Arguments
    ///
    /// * `pointer` - JSON pointer into the context (e.g. `/canaryConfigName`)
    ///
    /// # Returns
    ///
    /// `None` if the value is missing or null, the string otherwise.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the value is present but not a string.
    pub fn map_to_string(&self, pointer: &str) -> Result<Option<String>> {
        match self.context.pointer(pointer) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(AppError::InvalidInput(format!(
                "{} must be a string, got {}",
                pointer, other
            ))),
        }
    }

    /// Builds the typed resolution input for this stage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config name is present but not a string
    /// - The execution has no application
    pub fn resolution_input(&self) -> Result<ResolutionInput> {
        let config_name = self.map_to_string(CANARY_CONFIG_NAME_POINTER)?;
        if self.application.is_empty() {
            return Err(AppError::InvalidInput(
                "Execution application cannot be empty".to_string(),
            ));
        }
        Ok(ResolutionInput::new(config_name, self.application.clone()))
    }
}
