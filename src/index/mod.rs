//! Namespace maps for one resolution pass.
//!
//! [`AssetIndex`] is an immutable snapshot built by a pure operation over a
//! [`ProjectLayout`]: every pass rebuilds it from current file-system state,
//! so a pass is reproducible from its snapshot argument alone. There is no
//! cache and no cross-pass memory.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::AssetId;
use crate::meta;
use crate::project::{ProjectLayout, collect_asset_files, collect_meta_files};

/// Identifier namespace: identifier -> absolute asset path.
///
/// Built toolchain-tree first, project-tree second, with later inserts
/// overwriting. Project-local definitions therefore win on collision; that
/// order is a contract, not an accident.
#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    entries: IndexMap<AssetId, PathBuf>,
}

impl IdIndex {
    /// Look up the asset path declaring `id`.
    pub fn get(&self, id: &AssetId) -> Option<&Path> {
        self.entries.get(id).map(PathBuf::as_path)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &Path)> {
        self.entries.iter().map(|(id, path)| (id, path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn load_root(&mut self, root: &Path) {
        for meta_path in collect_meta_files(root) {
            if let Some(record) = meta::read_record(&meta_path) {
                self.entries.insert(record.id, record.asset_path);
            }
        }
    }
}

/// Path namespace: normalized root-relative path -> absolute file path.
///
/// Project and toolchain entries are keyed independently; lookup consults
/// the project map first.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    project: FxHashMap<String, PathBuf>,
    toolchain: FxHashMap<String, PathBuf>,
}

impl PathIndex {
    /// Resolve a path token to a concrete file, project entries first.
    pub fn resolve(&self, token: &str) -> Option<&Path> {
        let normalized = token.replace('\\', "/");
        self.project
            .get(&normalized)
            .or_else(|| self.toolchain.get(&normalized))
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.project.len() + self.toolchain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.project.is_empty() && self.toolchain.is_empty()
    }
}

/// The two namespace maps one resolution pass works against.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    pub ids: IdIndex,
    pub paths: PathIndex,
}

impl AssetIndex {
    /// Build both maps from the current file-system state of `layout`.
    ///
    /// Roots that are unset or unreadable contribute nothing; the build
    /// itself never fails.
    pub fn build(layout: &ProjectLayout) -> Self {
        let mut ids = IdIndex::default();
        if let Some(data_root) = layout.toolchain_data_root() {
            ids.load_root(data_root);
        }
        if let Some(workspace_root) = layout.workspace_root() {
            ids.load_root(workspace_root);
        }

        let mut paths = PathIndex::default();
        if let Some(data_root) = layout.toolchain_data_root() {
            for file in collect_asset_files(data_root) {
                if let Some(rel) = layout.relative_to_toolchain(&file) {
                    paths.toolchain.insert(rel, file);
                }
            }
        }
        if let Some(base_dir) = layout.base_dir() {
            for file in collect_asset_files(base_dir) {
                if let Some(rel) = layout.relative_to_base(&file) {
                    paths.project.insert(rel, file);
                }
            }
        }

        tracing::debug!(
            "indexed {} identifiers and {} paths",
            ids.len(),
            paths.len()
        );
        Self { ids, paths }
    }
}
