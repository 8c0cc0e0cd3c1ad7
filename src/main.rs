//! # yunetas CLI Entry Point
//!
//! Parses arguments with clap and routes to the command handlers.
//!
//! ## Command Structure
//!
//! - **Setup**: `init-debug`, `init-prod`
//! - **Build**: `build`, `clean`, `test`
//! - **Misc**: `version`, `venv create|delete`

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use yunetas::build::SystemRunner;
use yunetas::commands::cycle::{self, Action};
use yunetas::commands::venv;
use yunetas::config::Context;

#[derive(Parser)]
#[command(name = "yunetas")]
#[command(about = "TUI for yunetas SDK")]
#[command(long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Show progress messages and debug logs
    #[arg(long, global = true)]
    verbose: bool,

    /// yunetas source tree (overrides YUNETAS_BASE)
    #[arg(long, global = true, value_name = "DIR")]
    base: Option<PathBuf>,

    /// Fail on .config lines that are not KEY=VALUE
    #[arg(long, global = true)]
    strict_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize yunetas in Debug mode
    InitDebug,
    /// Initialize yunetas in Production mode
    InitProd,
    /// Build yunetas
    Build,
    /// Clean up generated files from yunetas
    Clean,
    /// Run tests on yunetas
    Test,
    /// Print version information
    Version,
    /// Manage virtual environments
    Venv {
        #[command(subcommand)]
        op: Option<VenvOp>,
    },
}

#[derive(Subcommand)]
enum VenvOp {
    /// Create a virtual environment
    Create { venv_name: String },
    /// Delete a virtual environment
    Delete { venv_name: String },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// True when `-v`/`--version` appears among the global options, i.e. before the first
/// subcommand word. Checked before clap sees the rest of the command line.
fn wants_version<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_ref().to_str() {
            Some("-v" | "--version") => return true,
            Some("--base") => {
                args.next();
            }
            Some(a) if a.starts_with('-') => {}
            _ => return false,
        }
    }
    false
}

fn main() {
    if wants_version(std::env::args_os()) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but did not succeed.
fn run(cli: Cli) -> Result<bool> {
    let action = match cli.command {
        None => {
            Cli::command().print_help()?;
            return Ok(false);
        }
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return Ok(true);
        }
        Some(Commands::Venv { op }) => {
            return match op {
                Some(VenvOp::Create { venv_name }) => {
                    venv::create(&venv_name);
                    Ok(true)
                }
                Some(VenvOp::Delete { venv_name }) => {
                    venv::delete(&venv_name);
                    Ok(true)
                }
                None => {
                    if let Some(cmd) = Cli::command().find_subcommand_mut("venv") {
                        cmd.print_help()?;
                    }
                    Ok(false)
                }
            };
        }
        Some(Commands::InitDebug) => Action::InitDebug,
        Some(Commands::InitProd) => Action::InitProd,
        Some(Commands::Build) => Action::Build,
        Some(Commands::Clean) => Action::Clean,
        Some(Commands::Test) => Action::Test,
    };

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let ctx = Context::discover(
        cli.base.as_deref(),
        |var| std::env::var(var).ok(),
        &cwd,
        cli.strict_config,
    )?;

    let outcome = cycle::run(&ctx, action, &mut SystemRunner, cli.verbose)?;
    Ok(outcome.is_ok())
}
