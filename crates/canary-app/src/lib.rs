// Rust guideline compliant 2026-10-19

//! Workflow-step services for canary config resolution.
//!
//! This crate wires the pure resolver into a pipeline step: it adapts loosely
//! typed stage context into typed resolution input, fetches the catalog, and
//! reports results through stable error codes and response envelopes.

pub mod error;
pub mod response;
pub mod stage;
pub mod task;

pub use error::{AppError, ErrorCode, Result};
pub use response::{ErrorEnvelope, Resolved, SuccessEnvelope};
pub use stage::{StageExecution, CANARY_CONFIG_NAME_POINTER};
pub use task::{ExecutionStatus, ResolveConfigIdTask, Task, TaskResult, CANARY_CONFIG_ID_KEY};
