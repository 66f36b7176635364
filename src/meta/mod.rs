//! Sidecar metadata records.
//!
//! Every Minty asset may carry a sidecar file at the same path plus a
//! `.meta` suffix, declaring the asset's identifier in a line of the form
//! `: <HEXID>`. Additional lines are toolchain data this crate ignores.
//!
//! Readers here never fail a bulk pass: a sidecar that cannot be read or
//! parsed is skipped with a trace log.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::base::AssetId;

/// File extension of sidecar metadata files (without the dot).
pub const META_EXTENSION: &str = "meta";

/// Record line grammar: `: ` followed by a 16- or 32-digit hex identifier.
/// The first match anywhere in the file wins.
fn record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r": ([0-9a-fA-F]{16}(?:[0-9a-fA-F]{16})?)").expect("record pattern")
    })
}

/// A parsed sidecar record: the asset it describes and its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRecord {
    /// The asset path (sidecar suffix stripped).
    pub asset_path: PathBuf,
    /// The declared identifier.
    pub id: AssetId,
}

/// Extract the declared identifier from sidecar file content.
pub fn parse_record(content: &str) -> Option<AssetId> {
    record_pattern()
        .captures(content)
        .and_then(|caps| AssetId::parse(caps.get(1)?.as_str()))
}

/// Render sidecar content declaring `id`.
pub fn render_record(id: &AssetId) -> String {
    format!(": {id}\n")
}

/// Read and parse one sidecar file.
///
/// Returns `None` if the file cannot be read or holds no identifier line;
/// either way the record is skipped, never an error.
pub fn read_record(meta_path: &Path) -> Option<MetaRecord> {
    let content = match std::fs::read_to_string(meta_path) {
        Ok(content) => content,
        Err(err) => {
            tracing::trace!("skipping unreadable sidecar {}: {err}", meta_path.display());
            return None;
        }
    };
    let Some(id) = parse_record(&content) else {
        tracing::trace!("skipping sidecar without record line: {}", meta_path.display());
        return None;
    };
    Some(MetaRecord {
        asset_path: asset_path_for(meta_path),
        id,
    })
}

/// Check whether a path names a sidecar file.
pub fn is_meta_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == META_EXTENSION)
}

/// The asset path a sidecar file describes (`tex.png.meta` -> `tex.png`).
pub fn asset_path_for(meta_path: &Path) -> PathBuf {
    meta_path.with_extension("")
}

/// The sidecar path for an asset (`tex.png` -> `tex.png.meta`).
pub fn meta_path_for(asset_path: &Path) -> PathBuf {
    let mut os = asset_path.as_os_str().to_os_string();
    os.push(".");
    os.push(META_EXTENSION);
    PathBuf::from(os)
}
