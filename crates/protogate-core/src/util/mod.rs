//! Utility modules.
//!
//! - [`ids`]: protocol id derivation and id normalization
//! - [`paths`]: keeping references inside their root directory

pub mod ids;
pub mod paths;
