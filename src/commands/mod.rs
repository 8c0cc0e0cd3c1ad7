//! CLI command handlers
//!
//! Kept out of main.rs so they can be driven with a fake command runner.

pub mod cycle;
pub mod venv;
