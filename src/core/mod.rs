//! Core types and schemas for prime-bench.
//!
//! This module contains the `RunReport` schema (v1) written by `--json`.

pub mod env;
pub mod schema;

// Re-export key types for convenience
pub use env::EnvironmentInfo;
pub use schema::{RunReport, SCHEMA_VERSION, TimingStat};
