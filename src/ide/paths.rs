//! Path token resolution — navigation targets and identifier hints.

use std::path::{Path, PathBuf};

use crate::index::AssetIndex;
use crate::meta;
use crate::scan::DocumentScan;

/// One path token with its resolved file and optional identifier hint.
#[derive(Debug, Clone)]
pub struct PathResolution {
    /// The token text as written.
    pub text: String,
    /// Line number (0-indexed).
    pub line: u32,
    /// Start column (inclusive).
    pub start_col: u32,
    /// End column (exclusive).
    pub end_col: u32,
    /// The file the token resolves to, if any.
    pub target: Option<PathBuf>,
    /// `→ <identifier>` when the resolved file has a sidecar record.
    pub hint: Option<String>,
}

/// Resolve every path token in a document.
///
/// Lookup is project-relative first, toolchain-relative second; the first
/// match wins. A token that matches neither yields no target and no hint.
pub fn resolve_paths(scan: &DocumentScan, index: &AssetIndex) -> Vec<PathResolution> {
    scan.paths
        .iter()
        .map(|occ| {
            let target = index.paths.resolve(&occ.text).map(Path::to_path_buf);
            let hint = target
                .as_deref()
                .and_then(|file| meta::read_record(&meta::meta_path_for(file)))
                .map(|record| format!("→ {}", record.id));

            PathResolution {
                text: occ.text.clone(),
                line: occ.line,
                start_col: occ.start_col,
                end_col: occ.end_col,
                target,
                hint,
            }
        })
        .collect()
}
