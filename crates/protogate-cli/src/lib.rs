//! # protogate-cli
//!
//! The `protogate` command-line tool:
//! - Protocol script inventory and coverage
//! - Per-protocol manifests, optionally running validator commands
//! - Coverage scorecards
//! - Artifact quality gates
//! - Configuration management
//!
//! JSON results go to stdout and logs to stderr. Exit codes: `0` pass,
//! `1` gate or validator failure, `2` fatal error.

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod logging;

pub use cli::Cli;
pub use commands::{EXIT_ERROR, EXIT_FAIL, EXIT_OK, run};
