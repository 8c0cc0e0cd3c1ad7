use super::core::{BuildOutcome, build_all, run_in_all};
use super::runner::{BuildCommand, CommandRunner};
use crate::config::BuildTool;
use colored::*;
use std::path::PathBuf;

pub fn ctest_command() -> BuildCommand {
    BuildCommand::new("ctest", ["--output-on-failure"])
}

/// Builds everything, then runs `ctest` everywhere. Tests are not run at all if any
/// directory failed to build.
pub fn run_tests(
    dirs: &[PathBuf],
    tool: BuildTool,
    runner: &mut dyn CommandRunner,
) -> BuildOutcome {
    let built = build_all(dirs, tool, runner);
    if !built.is_ok() {
        println!("{} Build failed, not running tests.", "x".red());
        return built;
    }

    println!("{} Running tests...", "🧪".magenta());
    run_in_all(dirs, &ctest_command(), runner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::core::{BUILD_DIR, cmake_project};

    #[test]
    fn test_build_failure_skips_ctest() {
        let tmp = tempfile::tempdir().unwrap();
        let a = cmake_project(tmp.path(), "a");
        let b = cmake_project(tmp.path(), "b");
        let mut runner =
            crate::build::runner::testing::RecordingRunner::failing_in(&[a.join(BUILD_DIR)]);

        let outcome = run_tests(&[a.clone(), b], BuildTool::Make, &mut runner);

        assert!(!outcome.is_ok());
        assert_eq!(outcome.failed, vec![a]);
        assert_eq!(runner.programs(), vec!["make", "make"]);
    }

    #[test]
    fn test_build_then_ctest() {
        let tmp = tempfile::tempdir().unwrap();
        let a = cmake_project(tmp.path(), "a");
        let b = cmake_project(tmp.path(), "b");
        let mut runner = crate::build::runner::testing::RecordingRunner::default();

        let outcome = run_tests(&[a, b], BuildTool::Ninja, &mut runner);

        assert!(outcome.is_ok());
        assert_eq!(runner.programs(), vec!["ninja", "ninja", "ctest", "ctest"]);
    }
}
