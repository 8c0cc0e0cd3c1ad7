//! Build cycle handler
//!
//! Handles `init-debug`, `init-prod`, `build`, `clean` and `test`: environment setup
//! first, then one fan-out over the configured directories.

use colored::*;

use crate::build::{self, BuildOutcome, BuildType, CommandRunner};
use crate::config::Context;
use crate::error::Result;
use crate::setup::{self, CompileOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InitDebug,
    InitProd,
    Build,
    Clean,
    Test,
}

impl Action {
    pub fn description(self) -> &'static str {
        match self {
            Action::InitDebug => "Initialize yunetas in Debug mode",
            Action::InitProd => "Initialize yunetas in Production mode",
            Action::Build => "Build yunetas",
            Action::Clean => "Clean up generated files from yunetas",
            Action::Test => "Run tests on yunetas",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Action::InitDebug | Action::InitProd => "Configure",
            Action::Build => "Build",
            Action::Clean => "Clean",
            Action::Test => "Test",
        }
    }

    /// Init actions start from an empty include directory.
    fn resets_outputs(self) -> bool {
        matches!(self, Action::InitDebug | Action::InitProd)
    }
}

/// Runs `action` against the tree described by `ctx`.
///
/// Setup errors are returned; per-directory failures only show up in the outcome.
pub fn run(
    ctx: &Context,
    action: Action,
    runner: &mut dyn CommandRunner,
    verbose: bool,
) -> Result<BuildOutcome> {
    if verbose {
        println!("{}", action.description());
    }

    let options = CompileOptions { strict: ctx.strict };
    let paths = setup::initialize(&ctx.base_dir, action.resets_outputs(), options)?;
    paths.print_summary();

    let settings = &ctx.settings.build;
    let dirs = build::resolve(&paths.base_dir, &settings.directories);
    tracing::debug!(count = dirs.len(), "resolved build directories");
    if dirs.is_empty() {
        println!(
            "{} No build directories found under {}",
            "!".yellow(),
            paths.base_dir.display()
        );
    }

    let outcome = match action {
        Action::InitDebug => build::configure_all(&dirs, BuildType::Debug, settings.tool, runner),
        Action::InitProd => build::configure_all(&dirs, BuildType::Prod, settings.tool, runner),
        Action::Build => build::build_all(&dirs, settings.tool, runner),
        Action::Clean => build::clean_all(&dirs, settings.tool, runner),
        Action::Test => build::run_tests(&dirs, settings.tool, runner),
    };
    outcome.print_summary(action.label());

    if verbose {
        println!("Done");
    }
    Ok(outcome)
}
