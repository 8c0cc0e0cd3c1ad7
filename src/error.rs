//! Error types for yunetas.
//!
//! Setup-phase errors ([`EnvironmentError`], [`Error::Io`], [`CompileError`]) are fatal
//! for the CLI. [`SubprocessError`] is only recorded per directory during a fan-out and
//! never aborts the run, so it has no place in [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// The base directory or one of its required files is unusable.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("YUNETAS_BASE_DIR '{}' does not exist or is not a directory", .0.display())]
    InvalidBaseDir(PathBuf),

    #[error("{file} file not found in '{}'", .dir.display())]
    MissingFile { file: &'static str, dir: PathBuf },

    #[error(
        "no base directory: set YUNETAS_BASE or run from a directory containing YUNETA_VERSION"
    )]
    NoBaseDir,
}

/// Failure while turning a Kconfig-style file into header defines.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("error processing configuration file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: malformed entry '{text}'", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        text: String,
    },
}

/// An external build command could not be run or exited unsuccessfully.
#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("failed to launch '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {}", exit_description(.code))]
    Failed { command: String, code: Option<i32> },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "a signal".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("I/O error on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file '{}'", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
