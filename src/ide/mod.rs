//! Editor features — high-level APIs for host adapters.
//!
//! This module is the interface between the cross-reference model and an
//! editor host. Each function corresponds to one presentation concern.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take a scan, an index, and a layout; return data
//! 2. **No host types**: results are plain structs, converted at the host
//!    boundary
//! 3. **Snapshot-driven**: every pass works against one [`AssetIndex`]
//!    built for it
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use minty::ide::AnalysisHost;
//! use minty::project::ProjectLayout;
//!
//! let mut host = AnalysisHost::new(ProjectLayout::discover(Some(root)));
//! host.set_document_content("scene.minty", text);
//!
//! let analysis = host.analysis();
//! let decorations = analysis.decorations("scene.minty".as_ref());
//! ```
//!
//! [`AssetIndex`]: crate::index::AssetIndex

mod analysis;
mod decorations;
mod hover;
mod links;
mod paths;
mod resolve;

pub use analysis::{Analysis, AnalysisHost, Versioned};
pub use decorations::{ClassSpan, Decorations, HintSpan, decorations};
pub use hover::{HoverResult, hover};
pub use links::{DocumentLink, document_links};
pub use paths::{PathResolution, resolve_paths};
pub use resolve::{IdResolution, RefClass, RefTarget, resolve_ids};
