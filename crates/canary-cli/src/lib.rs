// Rust guideline compliant 2026-10-19

//! Canary CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;

pub use output::{create_formatter, OutputFormatter};
