//! Kconfig-style `KEY=VALUE` files to C `#define` lines.
//!
//! Each non-blank, non-comment line is split on its first `=`. Values map to defines as:
//!
//! - `y` becomes `1`
//! - all decimal digits stay unquoted
//! - anything else is emitted as a string literal, with one leading and one trailing
//!   `"` removed if present
//!
//! Lines without `=` are skipped unless strict mode is on.

use crate::error::{CompileError, Error, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// Reject lines that are not blank, not comments and not `KEY=VALUE`.
    pub strict: bool,
}

/// One `KEY=VALUE` line, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub raw_value: String,
}

impl ConfigEntry {
    /// Parses one line. `None` for blank lines, comments and lines without `=`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some(Self {
            key: key.trim().to_string(),
            raw_value: value.trim().to_string(),
        })
    }

    pub fn to_define(&self) -> String {
        let value = self.raw_value.as_str();
        if value == "y" {
            format!("#define {} 1", self.key)
        } else if is_decimal(value) {
            format!("#define {} {}", self.key, value)
        } else {
            let value = value.strip_prefix('"').unwrap_or(value);
            let value = value.strip_suffix('"').unwrap_or(value);
            format!("#define {} \"{}\"", self.key, value)
        }
    }
}

fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Generated `#define` lines in source order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDocument {
    lines: Vec<String>,
}

impl HeaderDocument {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The full header text: banner first, then one define per line.
    pub fn render(&self, banner: &str) -> String {
        let mut out = String::with_capacity(banner.len() + self.lines.len() * 32);
        out.push_str(banner);
        out.push_str(&self.to_string());
        out
    }
}

impl fmt::Display for HeaderDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Compiles the file at `path`.
pub fn compile(path: &Path, options: CompileOptions) -> Result<HeaderDocument> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    compile_reader(BufReader::new(file), path, options)
}

/// Compiles already-open content; `origin` is only used in error messages.
pub fn compile_reader<R: BufRead>(
    reader: R,
    origin: &Path,
    options: CompileOptions,
) -> Result<HeaderDocument> {
    let mut doc = HeaderDocument::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CompileError::Read {
            path: origin.to_path_buf(),
            source,
        })?;

        match ConfigEntry::parse(&line) {
            Some(entry) if options.strict && entry.key.is_empty() => {
                return Err(malformed(origin, idx, &line));
            }
            Some(entry) => doc.lines.push(entry.to_define()),
            None if options.strict && !is_ignorable(&line) => {
                return Err(malformed(origin, idx, &line));
            }
            None => {
                tracing::trace!(line = idx + 1, "skipping line without '='");
            }
        }
    }

    Ok(doc)
}

fn malformed(origin: &Path, idx: usize, line: &str) -> Error {
    CompileError::Malformed {
        path: origin.to_path_buf(),
        line: idx + 1,
        text: line.trim().to_string(),
    }
    .into()
}
