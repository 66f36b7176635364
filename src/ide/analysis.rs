//! AnalysisHost and Analysis — unified state management for editor features.
//!
//! The `AnalysisHost` owns the open documents and the project layout, and
//! provides `Analysis` snapshots for querying. Each snapshot rebuilds the
//! namespace maps from current file-system state: correctness favors
//! freshness over caching at the scale of typical Minty projects.
//!
//! Documents carry a version that increases on every edit. Results that a
//! host applies asynchronously are tagged with the version they were
//! computed against, so a pass superseded by a newer edit can be discarded
//! instead of clobbering newer results.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new(layout);
//!
//! // Apply document changes
//! host.set_document_content("scene.minty", text);
//!
//! // Get a snapshot for queries
//! let analysis = host.analysis();
//! let decorations = analysis.decorations("scene.minty".as_ref());
//! let hover = analysis.hover("scene.minty".as_ref(), position);
//! ```

use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::base::{AssetId, Position};
use crate::idgen;
use crate::index::AssetIndex;
use crate::project::ProjectLayout;
use crate::scan::{self, DocumentScan};

use super::{Decorations, DocumentLink, HoverResult};

struct DocumentState {
    text: String,
    version: u64,
}

/// A value computed against one document version.
///
/// Compare `version` with `AnalysisHost::document_version` before applying;
/// a mismatch means the document changed while the pass ran and the value
/// is stale.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub version: u64,
    pub value: T,
}

/// Owns the open documents and project layout for the editor layer.
///
/// Apply changes via `set_document_content()` and `remove_document()`,
/// then get a snapshot via `analysis()`.
pub struct AnalysisHost {
    layout: ProjectLayout,
    documents: FxHashMap<PathBuf, DocumentState>,
}

impl AnalysisHost {
    /// Create a host for the given project layout.
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            documents: FxHashMap::default(),
        }
    }

    /// The layout this host resolves against.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Replace the layout (workspace or toolchain roots changed).
    pub fn set_layout(&mut self, layout: ProjectLayout) {
        self.layout = layout;
    }

    /// Set the content of a document, bumping its version.
    ///
    /// Returns the new version.
    pub fn set_document_content(
        &mut self,
        path: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> u64 {
        match self.documents.entry(path.into()) {
            Entry::Occupied(mut entry) => {
                let state = entry.get_mut();
                state.text = text.into();
                state.version += 1;
                state.version
            }
            Entry::Vacant(entry) => {
                entry.insert(DocumentState {
                    text: text.into(),
                    version: 1,
                });
                1
            }
        }
    }

    /// Remove a document from the host.
    pub fn remove_document(&mut self, path: &Path) {
        self.documents.remove(path);
    }

    /// The current version of a document, if it is open.
    pub fn document_version(&self, path: &Path) -> Option<u64> {
        self.documents.get(path).map(|state| state.version)
    }

    /// Get a snapshot for querying.
    ///
    /// Rebuilds the namespace maps from the current file-system state;
    /// there is no cache to invalidate.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            index: AssetIndex::build(&self.layout),
            layout: &self.layout,
            documents: &self.documents,
        }
    }
}

/// One consistent snapshot of the analysis state.
///
/// All queries against the same `Analysis` see the same namespace maps.
pub struct Analysis<'a> {
    index: AssetIndex,
    layout: &'a ProjectLayout,
    documents: &'a FxHashMap<PathBuf, DocumentState>,
}

impl Analysis<'_> {
    fn document(&self, path: &Path) -> Option<&DocumentState> {
        self.documents.get(path)
    }

    fn scan(&self, path: &Path) -> Option<(u64, DocumentScan)> {
        let state = self.document(path)?;
        Some((state.version, scan::scan_document(&state.text)))
    }

    /// Classification and hint decorations for a document.
    pub fn decorations(&self, path: &Path) -> Option<Versioned<Decorations>> {
        let (version, scan) = self.scan(path)?;
        Some(Versioned {
            version,
            value: super::decorations(&scan, &self.index, self.layout),
        })
    }

    /// Navigation links for a document.
    pub fn document_links(&self, path: &Path) -> Option<Versioned<Vec<DocumentLink>>> {
        let (version, scan) = self.scan(path)?;
        Some(Versioned {
            version,
            value: super::document_links(&scan, &self.index, self.layout),
        })
    }

    /// Hover information at a position in a document.
    pub fn hover(&self, path: &Path, position: Position) -> Option<HoverResult> {
        let (_, scan) = self.scan(path)?;
        super::hover(&scan, &self.index, self.layout, position)
    }

    /// The next free sequential short identifier for a document.
    pub fn next_sequential(&self, path: &Path) -> Option<AssetId> {
        let state = self.document(path)?;
        Some(idgen::next_sequential(&state.text))
    }

    /// The namespace maps this snapshot was built with.
    pub fn index(&self) -> &AssetIndex {
        &self.index
    }
}
