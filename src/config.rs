//! Base-directory resolution and the optional `yunetas.toml` settings file.

use crate::error::{EnvironmentError, Error, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Sentinel file that marks a yunetas source tree.
pub const VERSION_FILE: &str = "YUNETA_VERSION";
/// Kconfig output consumed by the header generator.
pub const CONFIG_FILE: &str = ".config";
/// Optional per-tree settings.
pub const SETTINGS_FILE: &str = "yunetas.toml";

pub const BASE_ENV: &str = "YUNETAS_BASE";
pub const LEGACY_BASE_ENV: &str = "YUNETAS_BASE_DIR";

/// Subprojects built by default, relative to the base directory.
pub const DEFAULT_DIRECTORIES: &[&str] = &[
    "kernel/c/gobj-c",
    "kernel/c/root-linux",
    "kernel/c/root-esp32",
    "modules/c/*",
    "utils/c/*",
    "yunos/c/*",
    "stress/c/*",
    "tests/c/*",
];

#[derive(Deserialize, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Deserialize, Debug)]
pub struct BuildSettings {
    #[serde(default)]
    pub tool: BuildTool,
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            tool: BuildTool::default(),
            directories: default_directories(),
        }
    }
}

fn default_directories() -> Vec<String> {
    DEFAULT_DIRECTORIES.iter().map(|s| s.to_string()).collect()
}

/// Backend driven by CMake.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    #[default]
    Make,
    Ninja,
}

impl BuildTool {
    pub fn program(self) -> &'static str {
        match self {
            BuildTool::Make => "make",
            BuildTool::Ninja => "ninja",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl Settings {
    /// Reads `<base>/yunetas.toml`, falling back to defaults when it is absent.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Self::parse(&content).map_err(|source| Error::Settings { path, source })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Picks the base directory: explicit value, `YUNETAS_BASE`, legacy `YUNETAS_BASE_DIR`,
/// then `cwd` when it holds a `YUNETA_VERSION` file.
///
/// The environment is passed in as a lookup so callers never need to mutate the
/// process environment.
pub fn resolve_base_dir<F>(explicit: Option<&Path>, env: F, cwd: &Path) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    for var in [BASE_ENV, LEGACY_BASE_ENV] {
        if let Some(value) = env(var).filter(|v| !v.trim().is_empty()) {
            tracing::debug!(var, %value, "base directory from environment");
            return Ok(PathBuf::from(value));
        }
    }

    if cwd.join(VERSION_FILE).is_file() {
        tracing::debug!(cwd = %cwd.display(), "base directory from working directory");
        return Ok(cwd.to_path_buf());
    }

    Err(EnvironmentError::NoBaseDir.into())
}

/// Everything a command needs to run against one source tree.
#[derive(Debug)]
pub struct Context {
    pub base_dir: PathBuf,
    pub settings: Settings,
    /// Fail on unparseable `.config` lines instead of skipping them.
    pub strict: bool,
}

impl Context {
    pub fn new(base_dir: PathBuf, settings: Settings, strict: bool) -> Self {
        Self {
            base_dir,
            settings,
            strict,
        }
    }

    /// Resolves the base directory and loads its settings file if present.
    pub fn discover<F>(explicit: Option<&Path>, env: F, cwd: &Path, strict: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = resolve_base_dir(explicit, env, cwd)?;
        let settings = if base_dir.is_dir() {
            Settings::load(&base_dir)?
        } else {
            // Setup reports the invalid base directory itself.
            Settings::default()
        };
        Ok(Self::new(base_dir, settings, strict))
    }
}
