use std::path::{Path, PathBuf};

use crate::meta;

/// Collect every sidecar metadata file under `root`, recursively.
///
/// Dot-files and dot-directories are skipped. A root that does not exist
/// or cannot be read yields an empty result.
pub fn collect_meta_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(root, &mut |path| {
        if meta::is_meta_file(path) {
            files.push(path.to_path_buf());
        }
    });
    files
}

/// Collect every asset file under `root`, recursively.
///
/// Sidecar files, dot-files, and dot-directories are excluded. A root that
/// does not exist or cannot be read yields an empty result.
pub fn collect_asset_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(root, &mut |path| {
        if !meta::is_meta_file(path) {
            files.push(path.to_path_buf());
        }
    });
    files
}

fn walk(dir: &Path, visit: &mut impl FnMut(&Path)) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!("cannot enumerate {}: {err}", dir.display());
            return;
        }
    };

    for entry in entries {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        if path.is_dir() {
            walk(&path, visit);
        } else if path.is_file() {
            visit(&path);
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
