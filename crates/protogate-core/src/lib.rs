//! Protogate Core: shared errors, configuration, and utilities.
//!
//! This crate has no internal Protogate dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: [`GateConfig`] and config file resolution
//! - [`util`]: Id and path utilities

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{GateConfig, PathsConfig, RunnerConfig, ThresholdsConfig};
pub use error::{Error, Result};

pub use util::ids::{normalize_id, protocol_id_from_path, starts_with_digit};
pub use util::paths::{is_confined, resolve_under};
