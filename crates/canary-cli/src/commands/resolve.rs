// Rust guideline compliant 2026-10-19

//! Implementation of the `canary-resolve resolve` command.
//!
//! Resolves a canary config name within an application to its config ID,
//! either from explicit flags or from a serialized stage execution.

use canary_app::{AppError, ResolveConfigIdTask, StageExecution, Task, CANARY_CONFIG_ID_KEY};
use canary_core::FileCatalog;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Where the resolution input comes from.
#[derive(Debug, Clone)]
pub enum ResolveSource {
    /// Name and application given directly.
    Flags {
        /// Config name.
        name: String,
        /// Application name.
        application: String,
    },
    /// A stage execution JSON file.
    Stage(PathBuf),
}

/// Builds the stage execution for a resolve source.
///
/// # Errors
///
/// Returns an error if the stage file cannot be read or parsed.
pub fn load_stage(source: &ResolveSource) -> Result<StageExecution, AppError> {
    match source {
        ResolveSource::Flags { name, application } => Ok(StageExecution::new(
            application.clone(),
            json!({ "canaryConfigName": name }),
        )),
        ResolveSource::Stage(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
    }
}

/// Resolves a config ID against a catalog snapshot file.
///
/// # Arguments
///
/// * `source` - Where the config name and application come from
/// * `catalog_path` - Path to the catalog snapshot
///
/// # Returns
///
/// The resolved config ID.
///
/// # Errors
///
/// Returns an error if:
/// - The stage or catalog cannot be read
/// - No config matches, or more than one does
pub fn execute(source: &ResolveSource, catalog_path: &Path) -> Result<String, AppError> {
    let stage = load_stage(source)?;
    let task = ResolveConfigIdTask::new(FileCatalog::new(catalog_path.to_path_buf())?);
    let result = task.execute(&stage)?;

    result
        .context_str(CANARY_CONFIG_ID_KEY)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::InvalidInput(format!("Task result is missing {}", CANARY_CONFIG_ID_KEY))
        })
}
