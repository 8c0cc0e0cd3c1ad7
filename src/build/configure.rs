//! `init-debug` / `init-prod`: fresh CMake configure of every directory.

use super::core::{BUILD_DIR, BuildOutcome};
use super::runner::{BuildCommand, CommandRunner};
use crate::config::BuildTool;
use colored::*;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Prod,
}

impl BuildType {
    /// Value passed as `CMAKE_BUILD_TYPE`.
    pub fn cmake_name(self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Prod => "RelWithDebInfo",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuildType::Debug => "Debug",
            BuildType::Prod => "Production",
        })
    }
}

pub fn configure_command(build_type: BuildType, tool: BuildTool) -> BuildCommand {
    let mut args = Vec::new();
    if tool == BuildTool::Ninja {
        args.extend(["-G".to_string(), "Ninja".to_string()]);
    }
    args.push(format!("-DCMAKE_BUILD_TYPE={}", build_type.cmake_name()));
    args.push("..".to_string());
    BuildCommand {
        program: "cmake".to_string(),
        args,
    }
}

/// Recreates `<dir>/build` and runs CMake in it, for every directory.
///
/// Existing build directories are removed without confirmation. A failing directory is
/// reported and the rest still run.
pub fn configure_all(
    dirs: &[PathBuf],
    build_type: BuildType,
    tool: BuildTool,
    runner: &mut dyn CommandRunner,
) -> BuildOutcome {
    let command = configure_command(build_type, tool);
    let mut outcome = BuildOutcome::default();

    for dir in dirs {
        println!("{} Configuring {} ({})", "⚙".cyan(), dir.display(), build_type);
        match configure_one(dir, &command, runner) {
            Ok(()) => outcome.succeeded.push(dir.clone()),
            Err(msg) => {
                tracing::warn!(dir = %dir.display(), error = %msg, "configure failed");
                println!("{} {}: {}", "x".red(), dir.display(), msg);
                outcome.failed.push(dir.clone());
            }
        }
    }

    outcome
}

fn configure_one(
    dir: &Path,
    command: &BuildCommand,
    runner: &mut dyn CommandRunner,
) -> Result<(), String> {
    let build_dir = dir.join(BUILD_DIR);
    if build_dir.exists() {
        fs::remove_dir_all(&build_dir)
            .map_err(|e| format!("cannot remove {}: {}", build_dir.display(), e))?;
    }
    fs::create_dir_all(&build_dir)
        .map_err(|e| format!("cannot create {}: {}", build_dir.display(), e))?;
    runner.run(command, &build_dir).map_err(|e| e.to_string())
}
