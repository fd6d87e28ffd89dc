// Rust guideline compliant 2026-10-19

//! Command implementations for the canary CLI.

pub mod resolve;
