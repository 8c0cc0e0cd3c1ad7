//! # yunetas - Command-line front-end for the yunetas SDK
//!
//! Prepares a yunetas source tree for building and drives the per-subproject CMake
//! cycle.
//!
//! ## What it does
//!
//! - **Environment setup**: validates `YUNETAS_BASE`, creates `outputs/include` next to it
//! - **Header generation**: `YUNETA_VERSION` and `.config` become `yuneta_version.h` and
//!   `yuneta_config.h`, regenerated only when the source is newer
//! - **Build fan-out**: configure, build, clean and test every subproject in sequence,
//!   reporting failures without stopping
//!
//! ## Quick Start
//!
//! ```bash
//! export YUNETAS_BASE=/yuneta/development/yunetas
//! yunetas init-debug
//! yunetas build
//! yunetas test
//! ```
//!
//! ## Module Organization
//!
//! - [`setup`] - Kconfig compiler, staleness check, environment initialization
//! - [`build`] - Directory fan-out and external command execution
//! - [`config`] - Base directory and `yunetas.toml` settings
//! - [`commands`] - CLI command handlers

/// Directory fan-out and CMake/make/ctest execution.
pub mod build;

/// CLI command handlers extracted from main.
pub mod commands;

/// Base directory resolution and settings (`yunetas.toml`).
pub mod config;

/// Error types.
pub mod error;

/// Environment setup and header generation.
pub mod setup;

pub use error::{Error, Result};
