// Rust guideline compliant 2026-10-19

//! Canary Core Library
//!
//! This crate provides the foundational components for canary config resolution:
//! - Data models (CanaryConfig, ResolutionInput)
//! - Config ID resolution by name and application
//! - Catalog sources (in-memory and file-backed snapshots)
//! - Configuration loading
//! - Error types and result handling

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod resolve;

pub use catalog::{CatalogSource, FileCatalog, StaticCatalog};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{CanaryConfig, ResolutionInput};
pub use resolve::{find_candidates, resolve_config_id};
