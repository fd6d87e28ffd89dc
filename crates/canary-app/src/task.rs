// Rust guideline compliant 2026-10-19

//! Pipeline task that resolves a canary config name to its ID.

use crate::error::Result;
use crate::stage::StageExecution;
use canary_core::CatalogSource;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Context key under which the resolved ID is published.
pub const CANARY_CONFIG_ID_KEY: &str = "canaryConfigId";

/// Outcome status of a task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// The task completed and its outputs are valid.
    Succeeded,
}

/// Result of a task execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskResult {
    /// Execution status.
    pub status: ExecutionStatus,
    /// Values to merge into the stage context.
    pub context: serde_json::Map<String, serde_json::Value>,
}

impl TaskResult {
    /// Creates a succeeded result with an empty context.
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            status: ExecutionStatus::Succeeded,
            context: serde_json::Map::new(),
        }
    }

    /// Adds a context value.
    #[must_use]
    pub fn with_context(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    /// Returns a context value as a string, if present.
    pub fn context_str(&self, key: &str) -> Option<&str> {
        self.context.get(key).and_then(serde_json::Value::as_str)
    }
}

/// A unit of work executed within a pipeline stage.
pub trait Task {
    /// Executes the task against a stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot complete; the stage halts.
    fn execute(&self, stage: &StageExecution) -> Result<TaskResult>;
}

/// Resolves `canaryConfigName` in the stage context to `canaryConfigId`.
///
/// The catalog is fetched on every execution. Resolution failures are
/// terminal and are returned to the caller rather than retried.
#[derive(Debug, Clone)]
pub struct ResolveConfigIdTask<C> {
    catalog: C,
}

impl<C: CatalogSource> ResolveConfigIdTask<C> {
    /// Creates a task reading configs from `catalog`.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Returns the catalog source.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}

impl<C: CatalogSource> Task for ResolveConfigIdTask<C> {
    fn execute(&self, stage: &StageExecution) -> Result<TaskResult> {
        let input = stage.resolution_input()?;
        let configs = self.catalog.fetch_all_configs()?;
        debug!(
            configs = configs.len(),
            application = %input.application,
            "fetched canary config catalog"
        );

        let id = input.resolve(&configs).map_err(|e| {
            warn!(
                config_name = ?input.config_name,
                application = %input.application,
                error = %e,
                "canary config resolution failed"
            );
            e
        })?;

        info!(
            config_name = ?input.config_name,
            application = %input.application,
            config_id = %id,
            "resolved canary config"
        );
        Ok(TaskResult::succeeded().with_context(CANARY_CONFIG_ID_KEY, id))
    }
}
