//! Document links — clickable navigation between references and files.

use std::borrow::Cow;

use crate::index::AssetIndex;
use crate::project::ProjectLayout;
use crate::scan::DocumentScan;

use super::resolve::RefTarget;
use super::{resolve_ids, resolve_paths};

/// A navigation link anchored to one token in a document.
#[derive(Debug, Clone)]
pub struct DocumentLink {
    /// Line number (0-indexed).
    pub line: u32,
    /// Start column (inclusive).
    pub start_col: u32,
    /// End column (exclusive).
    pub end_col: u32,
    /// Where the link goes: a position in the same document, or a file.
    pub target: RefTarget,
    /// Tooltip text for the link.
    pub tooltip: Cow<'static, str>,
}

/// Get document links for a document.
///
/// Returns clickable links for:
/// 1. Local identifier references - jump to the canonical occurrence
/// 2. Global identifier references - open the resolved asset file
/// 3. Path tokens - open the file the path resolves to
pub fn document_links(
    scan: &DocumentScan,
    index: &AssetIndex,
    layout: &ProjectLayout,
) -> Vec<DocumentLink> {
    let mut links = Vec::new();

    for resolution in resolve_ids(scan, index, layout) {
        let Some(target) = resolution.target else {
            continue;
        };
        let tooltip = match &target {
            RefTarget::InDocument(position) => {
                Cow::Owned(format!("Go to line {}", position.line + 1))
            }
            RefTarget::File(path) => Cow::Owned(format!("Open {}", layout.display_path(path))),
        };
        links.push(DocumentLink {
            line: resolution.line,
            start_col: resolution.start_col,
            end_col: resolution.end_col,
            target,
            tooltip,
        });
    }

    for resolution in resolve_paths(scan, index) {
        let Some(file) = resolution.target else {
            continue;
        };
        links.push(DocumentLink {
            line: resolution.line,
            start_col: resolution.start_col,
            end_col: resolution.end_col,
            tooltip: Cow::Owned(format!("Open {}", layout.display_path(&file))),
            target: RefTarget::File(file),
        });
    }

    links
}
