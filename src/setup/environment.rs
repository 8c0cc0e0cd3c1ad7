//! Environment setup run before every build command.
//!
//! Validates the base directory, creates `<parent>/outputs/include` and regenerates
//! `yuneta_version.h` / `yuneta_config.h` when their sources are newer.

use super::kconfig::{self, CompileOptions};
use super::stale::is_stale;
use crate::config::{CONFIG_FILE, VERSION_FILE};
use crate::error::{EnvironmentError, Error, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const VERSION_HEADER: &str = "yuneta_version.h";
pub const CONFIG_HEADER: &str = "yuneta_config.h";

const VERSION_BANNER: &str = "\
/*
 *  Yuneta Version
 *  Automatically generated file. DO NOT EDIT.
 *  Set version in YUNETA_VERSION file.
 *
 *  Copyright (c) 2024, ArtGins
 */
#pragma once

";

const CONFIG_BANNER: &str = "\
/*
 *  Yuneta Configuration
 *  Automatically generated file. DO NOT EDIT.
 *  Set configuration in .config file.
 *
 *  Copyright (c) 2024, ArtGins
 */
#pragma once

";

/// Paths resolved by a successful setup.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub base_dir: PathBuf,
    pub version_file: PathBuf,
    pub config_file: PathBuf,
    pub outputs_dir: PathBuf,
    pub include_dir: PathBuf,
    pub version_header: PathBuf,
    pub config_header: PathBuf,
    /// Headers rewritten by this run; empty when everything was fresh.
    pub regenerated: Vec<PathBuf>,
}

impl OutputPaths {
    pub fn print_summary(&self) {
        println!("{} Setup completed successfully:", "✓".green());
        println!("  - YUNETAS_BASE_DIR: {}", self.base_dir.display());
        println!("  - YUNETA_VERSION: {}", self.version_file.display());
        println!("  - .config: {}", self.config_file.display());
        println!("  - Include directory: {}", self.include_dir.display());
    }
}

/// Prepares the output tree for `base_dir`.
///
/// With `reset_outputs` the include directory is deleted first, which forces both
/// headers to be regenerated.
pub fn initialize(
    base_dir: &Path,
    reset_outputs: bool,
    options: CompileOptions,
) -> Result<OutputPaths> {
    if !base_dir.is_dir() {
        return Err(EnvironmentError::InvalidBaseDir(base_dir.to_path_buf()).into());
    }
    let base_dir = base_dir
        .canonicalize()
        .map_err(|e| Error::io(base_dir, e))?;

    let version_file = require_file(&base_dir, VERSION_FILE)?;
    let config_file = require_file(&base_dir, CONFIG_FILE)?;

    let parent = base_dir.parent().unwrap_or(&base_dir);
    let outputs_dir = parent.join("outputs");
    let include_dir = outputs_dir.join("include");

    if reset_outputs && include_dir.exists() {
        tracing::debug!(dir = %include_dir.display(), "resetting include directory");
        fs::remove_dir_all(&include_dir).map_err(|e| Error::io(&include_dir, e))?;
    }
    fs::create_dir_all(&include_dir).map_err(|e| Error::io(&include_dir, e))?;

    let version_header = include_dir.join(VERSION_HEADER);
    let config_header = include_dir.join(CONFIG_HEADER);

    let mut regenerated = Vec::new();
    for (source, target, banner) in [
        (&version_file, &version_header, VERSION_BANNER),
        (&config_file, &config_header, CONFIG_BANNER),
    ] {
        if generate_header(source, target, banner, options)? {
            regenerated.push(target.clone());
        }
    }

    Ok(OutputPaths {
        base_dir,
        version_file,
        config_file,
        outputs_dir,
        include_dir,
        version_header,
        config_header,
        regenerated,
    })
}

fn require_file(base_dir: &Path, name: &'static str) -> Result<PathBuf> {
    let path = base_dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(EnvironmentError::MissingFile {
            file: name,
            dir: base_dir.to_path_buf(),
        }
        .into())
    }
}

/// Rewrites `target` from `source` if stale. Returns whether a write happened.
fn generate_header(
    source: &Path,
    target: &Path,
    banner: &str,
    options: CompileOptions,
) -> Result<bool> {
    if !is_stale(source, target) {
        tracing::debug!(header = %target.display(), "header up to date");
        return Ok(false);
    }

    let doc = kconfig::compile(source, options)?;
    fs::write(target, doc.render(banner)).map_err(|e| Error::io(target, e))?;

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!(
        "{} Generated '{}' at {}",
        "✓".green(),
        name,
        target.display()
    );
    Ok(true)
}
