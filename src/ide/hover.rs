//! Hover information implementation.

use crate::base::Position;
use crate::index::AssetIndex;
use crate::project::ProjectLayout;
use crate::scan::DocumentScan;

use super::resolve::{canonical_indices, reference_label};

/// Result of a hover request.
#[derive(Debug, Clone)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Line of the hovered token (0-indexed).
    pub line: u32,
    /// Start column (inclusive).
    pub start_col: u32,
    /// End column (exclusive).
    pub end_col: u32,
}

/// Get hover information for a position.
///
/// Returns local-reference info when the identifier under the cursor is
/// part of a repeated cluster, global-reference info when it resolves
/// through the namespace map, and `None` over unresolved identifiers or
/// plain text.
pub fn hover(
    scan: &DocumentScan,
    index: &AssetIndex,
    layout: &ProjectLayout,
    position: Position,
) -> Option<HoverResult> {
    let (i, occ) = scan
        .ids
        .iter()
        .enumerate()
        .find(|(_, occ)| occ.span().contains(position))?;

    let mut contents = format!("```text\n{}\n```\n", occ.id);

    let canonical = canonical_indices(scan);
    match canonical.get(&occ.id) {
        Some(&canon_idx) if canon_idx != i => {
            let canon = &scan.ids[canon_idx];
            match reference_label(canon) {
                Some(label) => contents.push_str(&format!("**Local reference to:** {label}")),
                None => contents.push_str(&format!("**Local reference** (line {})", canon.line + 1)),
            }
        }
        _ => {
            let path = index.ids.get(&occ.id)?;
            contents.push_str(&format!(
                "**Global reference to:** {}",
                layout.display_path(path)
            ));
        }
    }

    Some(HoverResult {
        contents,
        line: occ.line,
        start_col: occ.start_col,
        end_col: occ.end_col,
    })
}
