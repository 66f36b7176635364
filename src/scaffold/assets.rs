//! The asset catalog backing identifier and path pickers.

use crate::base::AssetId;
use crate::index::AssetIndex;
use crate::project::ProjectLayout;

/// One catalog entry: an asset with a sidecar record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Display path; toolchain entries carry the `[Minty]` marker.
    pub label: String,
    /// The identifier the asset's sidecar declares.
    pub id: AssetId,
    /// The path as written into documents: relative, forward-slash, without
    /// a marker.
    pub copy_path: String,
}

/// Build the catalog of all indexed assets, sorted by label.
pub fn asset_catalog(index: &AssetIndex, layout: &ProjectLayout) -> Vec<AssetEntry> {
    let mut entries: Vec<AssetEntry> = index
        .ids
        .iter()
        .map(|(id, path)| {
            let label = layout.display_path(path);
            let copy_path = layout
                .relative_to_base(path)
                .or_else(|| layout.relative_to_toolchain(path))
                .unwrap_or_else(|| {
                    path.file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default()
                });
            AssetEntry {
                label,
                id: id.clone(),
                copy_path,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.label.cmp(&b.label));
    entries
}
