use crate::error::SubprocessError;
use std::fmt;
use std::path::Path;
use std::process::Command;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands. Swapped for a recorder in tests.
pub trait CommandRunner {
    /// Runs `command` in `cwd` and waits for it to finish.
    fn run(&mut self, command: &BuildCommand, cwd: &Path) -> Result<(), SubprocessError>;
}

/// Spawns real processes with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &BuildCommand, cwd: &Path) -> Result<(), SubprocessError> {
        tracing::debug!(cwd = %cwd.display(), %command, "running");
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| SubprocessError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SubprocessError::Failed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}
