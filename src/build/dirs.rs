//! Directory pattern expansion.
//!
//! A pattern is `parent/leaf` relative to the base directory. The leaf may hold one `*`,
//! matched against the direct children of `parent` only. Leaves with more than one `*`
//! are rejected with a warning and resolve to nothing.

use colored::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expands `patterns` against `base_dir`, keeping only existing directories.
///
/// Output follows pattern order; wildcard matches within one pattern are sorted by name.
pub fn resolve<S: AsRef<str>>(base_dir: &Path, patterns: &[S]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref().trim_end_matches('/');
        let (parent, leaf) = match pattern.rsplit_once('/') {
            Some((parent, leaf)) => (base_dir.join(parent), leaf),
            None => (base_dir.to_path_buf(), pattern),
        };

        if leaf.matches('*').count() > 1 {
            tracing::warn!(pattern, "more than one '*' in pattern");
            println!(
                "{} Ignoring '{}': only one '*' is supported",
                "!".yellow(),
                pattern
            );
        } else if leaf.contains('*') {
            let found = expand(&parent, leaf);
            tracing::debug!(pattern, matches = found.len(), "expanded pattern");
            dirs.extend(found);
        } else {
            let dir = parent.join(leaf);
            if dir.is_dir() {
                dirs.push(dir);
            } else {
                tracing::debug!(pattern, "no such directory");
            }
        }
    }
    dirs
}

fn expand(parent: &Path, leaf: &str) -> Vec<PathBuf> {
    if !parent.is_dir() {
        return Vec::new();
    }
    WalkDir::new(parent)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .filter(|e| wildcard_match(leaf, &e.file_name().to_string_lossy()))
        .map(|e| e.into_path())
        .collect()
}

/// Single-`*` match; `resolve` rejects leaves holding more than one. Hidden names only
/// match when the pattern itself starts with `.`.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    if name.starts_with('.') && !pattern.starts_with('.') {
        return false;
    }
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
        None => pattern == name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(dirs: &[PathBuf]) -> Vec<String> {
        dirs.iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_wildcard_excludes_files() {
        let tmp = tempfile::tempdir().unwrap();
        let modules = tmp.path().join("modules").join("c");
        fs::create_dir_all(modules.join("a")).unwrap();
        fs::create_dir_all(modules.join("b")).unwrap();
        fs::write(modules.join("c.txt"), "").unwrap();

        let dirs = resolve(tmp.path(), &["modules/c/*"]);
        assert_eq!(names(&dirs), vec!["a", "b"]);
        assert!(dirs.iter().all(|d| d.starts_with(&modules)));
    }

    #[test]
    fn test_literal_pattern_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("kernel/c/gobj-c")).unwrap();
        fs::write(tmp.path().join("kernel/c/notes"), "").unwrap();

        let dirs = resolve(
            tmp.path(),
            &["kernel/c/gobj-c", "kernel/c/root-linux", "kernel/c/notes"],
        );
        assert_eq!(dirs, vec![tmp.path().join("kernel/c/gobj-c")]);
    }

    #[test]
    fn test_pattern_order_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("utils/c/ytests")).unwrap();
        fs::create_dir_all(tmp.path().join("kernel/c/gobj-c")).unwrap();

        let dirs = resolve(tmp.path(), &["utils/c/*", "kernel/c/gobj-c"]);
        assert_eq!(names(&dirs), vec!["ytests", "gobj-c"]);
    }

    #[test]
    fn test_missing_parent_resolves_to_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(resolve(tmp.path(), &["yunos/c/*"]).is_empty());
    }

    #[test]
    fn test_partial_wildcard_and_hidden() {
        let tmp = tempfile::tempdir().unwrap();
        let parent = tmp.path().join("tests").join("c");
        for d in ["test_a", "test_b", "other", ".test_hidden"] {
            fs::create_dir_all(parent.join(d)).unwrap();
        }
        let dirs = resolve(tmp.path(), &["tests/c/test_*"]);
        assert_eq!(names(&dirs), vec!["test_a", "test_b"]);
    }

    #[test]
    fn test_top_level_pattern() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("one")).unwrap();
        fs::create_dir_all(tmp.path().join("two")).unwrap();
        assert_eq!(names(&resolve(tmp.path(), &["*"])), vec!["one", "two"]);
    }

    #[test]
    fn test_multiple_wildcards_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let parent = tmp.path().join("modules").join("c");
        for d in ["a_b_c", "a*b*c"] {
            fs::create_dir_all(parent.join(d)).unwrap();
        }
        fs::create_dir_all(parent.join("kept")).unwrap();

        let dirs = resolve(tmp.path(), &["modules/c/a*b*c", "modules/c/kept"]);
        assert_eq!(names(&dirs), vec!["kept"]);
    }

    #[test]
    fn test_wildcard_match() {
        assert!(wildcard_match("*", "anything"));
        assert!(wildcard_match("c_*", "c_tls"));
        assert!(wildcard_match("*_test", "gobj_test"));
        assert!(!wildcard_match("ab*ba", "aba"));
        assert!(!wildcard_match("*", ".git"));
        assert!(wildcard_match(".*", ".git"));
    }
}
