//! Decoration sets — classification colors and inline hints.
//!
//! Presentation-ready output for a host's decoration API: one
//! classification span per identifier occurrence, plus inline hint spans
//! anchored just after the tokens that earned them.

use crate::index::AssetIndex;
use crate::project::ProjectLayout;
use crate::scan::DocumentScan;

use super::resolve::RefClass;
use super::{resolve_ids, resolve_paths};

/// A classification color span over one identifier occurrence.
#[derive(Debug, Clone)]
pub struct ClassSpan {
    /// Line number (0-indexed).
    pub line: u32,
    /// Start column (inclusive).
    pub start_col: u32,
    /// End column (exclusive).
    pub end_col: u32,
    pub class: RefClass,
}

/// An inline hint rendered after a token.
#[derive(Debug, Clone)]
pub struct HintSpan {
    /// Line number (0-indexed).
    pub line: u32,
    /// Anchor column: the end of the token the hint annotates.
    pub col: u32,
    /// The hint text (`→ …`).
    pub text: String,
}

/// All decorations for one document.
#[derive(Debug, Clone, Default)]
pub struct Decorations {
    pub classes: Vec<ClassSpan>,
    pub hints: Vec<HintSpan>,
}

/// Compute classification and hint decorations for a document.
pub fn decorations(
    scan: &DocumentScan,
    index: &AssetIndex,
    layout: &ProjectLayout,
) -> Decorations {
    let mut out = Decorations::default();

    for resolution in resolve_ids(scan, index, layout) {
        out.classes.push(ClassSpan {
            line: resolution.line,
            start_col: resolution.start_col,
            end_col: resolution.end_col,
            class: resolution.class,
        });
        if let Some(text) = resolution.hint {
            out.hints.push(HintSpan {
                line: resolution.line,
                col: resolution.end_col,
                text,
            });
        }
    }

    for resolution in resolve_paths(scan, index) {
        if let Some(text) = resolution.hint {
            out.hints.push(HintSpan {
                line: resolution.line,
                col: resolution.end_col,
                text,
            });
        }
    }

    out
}
