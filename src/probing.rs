use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

/// Search `probing_paths` for a file called `file_name`.
///
/// Relative probing paths are taken relative to `base_directory`. Each
/// directory is walked recursively in file-name order, and directories are
/// tried in the order given; the first match wins. Missing or unreadable
/// directories are skipped.
pub fn scan_probing_paths(
    base_directory: &Path,
    probing_paths: &[PathBuf],
    file_name: &str,
) -> Option<PathBuf> {
    if file_name.is_empty() {
        return None;
    }
    probing_paths.iter().find_map(|probing| {
        let root = if probing.is_absolute() {
            probing.clone()
        } else {
            base_directory.join(probing)
        };
        scan_directory(&root, file_name)
    })
}

fn scan_directory(root: &Path, file_name: &str) -> Option<PathBuf> {
    if !root.is_dir() {
        trace!(directory = %root.display(), "skipping missing probing directory");
        return None;
    }
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                trace!(error = %err, "skipping unreadable probing entry");
                None
            }
        })
        .find(|entry| entry.file_type().is_file() && entry.file_name() == file_name)
        .map(|entry| canonicalize_path(entry.path()))
}

fn canonicalize_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
