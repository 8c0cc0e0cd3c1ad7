use super::runner::{BuildCommand, CommandRunner};
use crate::config::BuildTool;
use colored::*;
use std::path::PathBuf;

pub const BUILD_DIR: &str = "build";
pub const CMAKE_MARKER: &str = "CMakeLists.txt";

/// Aggregate result of running one command over many directories.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl BuildOutcome {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn print_summary(&self, action: &str) {
        if self.is_ok() {
            println!(
                "{} {} finished: {} ok, {} skipped",
                "✓".green(),
                action,
                self.succeeded.len(),
                self.skipped.len()
            );
        } else {
            println!(
                "{} {} failed in {} of {} directories:",
                "x".red(),
                action,
                self.failed.len(),
                self.succeeded.len() + self.failed.len()
            );
            for dir in &self.failed {
                println!("   - {}", dir.display());
            }
        }
    }
}

/// Runs `command` inside `<dir>/build` for every directory that has both a
/// `CMakeLists.txt` and a `build/` directory.
///
/// Never stops early; every directory is visited.
pub fn run_in_all(
    dirs: &[PathBuf],
    command: &BuildCommand,
    runner: &mut dyn CommandRunner,
) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();

    for dir in dirs {
        let build_dir = dir.join(BUILD_DIR);
        if !dir.join(CMAKE_MARKER).is_file() {
            println!(
                "{} Skipping {}: no {}",
                "!".yellow(),
                dir.display(),
                CMAKE_MARKER
            );
            outcome.skipped.push(dir.clone());
            continue;
        }
        if !build_dir.is_dir() {
            println!(
                "{} Skipping {}: no {}/ directory (run init-debug or init-prod first)",
                "!".yellow(),
                dir.display(),
                BUILD_DIR
            );
            outcome.skipped.push(dir.clone());
            continue;
        }

        println!("{} {} in {}", "🔨".cyan(), command, build_dir.display());
        match runner.run(command, &build_dir) {
            Ok(()) => outcome.succeeded.push(dir.clone()),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "command failed");
                println!("{} {}: {}", "x".red(), dir.display(), e);
                outcome.failed.push(dir.clone());
            }
        }
    }

    outcome
}

pub fn install_command(tool: BuildTool) -> BuildCommand {
    BuildCommand::new(tool.program(), ["install"])
}

pub fn clean_command(tool: BuildTool) -> BuildCommand {
    BuildCommand::new(tool.program(), ["clean"])
}

/// Builds and installs every directory.
pub fn build_all(
    dirs: &[PathBuf],
    tool: BuildTool,
    runner: &mut dyn CommandRunner,
) -> BuildOutcome {
    run_in_all(dirs, &install_command(tool), runner)
}

/// Removes build products from every directory, keeping the CMake cache.
pub fn clean_all(
    dirs: &[PathBuf],
    tool: BuildTool,
    runner: &mut dyn CommandRunner,
) -> BuildOutcome {
    run_in_all(dirs, &clean_command(tool), runner)
}

#[cfg(test)]
pub(crate) fn cmake_project(root: &std::path::Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(dir.join(BUILD_DIR)).unwrap();
    std::fs::write(dir.join(CMAKE_MARKER), "project(x)\n").unwrap();
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::runner::testing::RecordingRunner;
    use std::fs;

    #[test]
    fn test_failure_in_middle_does_not_stop_fanout() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs: Vec<PathBuf> = ["one", "two", "three"]
            .iter()
            .map(|n| cmake_project(tmp.path(), n))
            .collect();
        let mut runner = RecordingRunner::failing_in(&[dirs[1].join(BUILD_DIR)]);

        let outcome = build_all(&dirs, BuildTool::Make, &mut runner);

        assert!(!outcome.is_ok());
        assert_eq!(outcome.failed, vec![dirs[1].clone()]);
        assert_eq!(outcome.succeeded, vec![dirs[0].clone(), dirs[2].clone()]);
        assert_eq!(runner.calls.len(), 3);
        for ((cmd, cwd), dir) in runner.calls.iter().zip(&dirs) {
            assert_eq!(cmd, &BuildCommand::new("make", ["install"]));
            assert_eq!(cwd, &dir.join(BUILD_DIR));
        }
    }

    #[test]
    fn test_skips_without_marker_or_build_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let ready = cmake_project(tmp.path(), "ready");

        let no_marker = tmp.path().join("no_marker");
        fs::create_dir_all(no_marker.join(BUILD_DIR)).unwrap();

        let no_build = tmp.path().join("no_build");
        fs::create_dir_all(&no_build).unwrap();
        fs::write(no_build.join(CMAKE_MARKER), "").unwrap();

        let dirs = vec![no_marker.clone(), ready.clone(), no_build.clone()];
        let mut runner = RecordingRunner::default();
        let outcome = clean_all(&dirs, BuildTool::Ninja, &mut runner);

        assert!(outcome.is_ok());
        assert_eq!(outcome.succeeded, vec![ready.clone()]);
        assert_eq!(outcome.skipped, vec![no_marker, no_build]);
        assert_eq!(runner.calls.len(), 1);
        assert_eq!(runner.calls[0].0, BuildCommand::new("ninja", ["clean"]));
    }

    #[test]
    fn test_empty_directory_list_is_ok() {
        let mut runner = RecordingRunner::default();
        let outcome = build_all(&[], BuildTool::Make, &mut runner);
        assert!(outcome.is_ok());
        assert!(runner.calls.is_empty());
    }
}
