//! Integration tests, grouped by pipeline stage.

mod manifest_flow;
mod scorecard_flow;
