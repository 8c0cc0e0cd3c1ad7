use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// True when `target` is missing or strictly older than `source`.
///
/// Equal timestamps count as fresh. An unreadable timestamp counts as stale so the
/// caller regenerates and surfaces the real error.
pub fn is_stale(source: &Path, target: &Path) -> bool {
    if !target.is_file() {
        return true;
    }
    match (modified(source), modified(target)) {
        (Some(src), Some(dst)) => src > dst,
        _ => true,
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
