//! Identifier resolution — classify occurrences and find their targets.
//!
//! A locally repeated identifier forms a cluster: the occurrence with the
//! smallest indentation (ties broken by document order) is the canonical
//! one, every other member refers to it. Canonical occurrences and
//! singletons resolve through the identifier namespace map instead.

use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::base::{AssetId, Position};
use crate::index::AssetIndex;
use crate::project::ProjectLayout;
use crate::scan::{DocumentScan, IdOccurrence};

/// Classification of one identifier occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefClass {
    /// Refers to the canonical occurrence of the same identifier in the
    /// same document.
    Local,
    /// Resolved through the identifier namespace map to an asset file.
    Global,
    /// Matches nothing; a normal outcome, not an error.
    Unresolved,
}

/// Navigation target of a resolved occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTarget {
    /// A jump within the same document.
    InDocument(Position),
    /// An asset file on disk.
    File(PathBuf),
}

/// One identifier occurrence with its classification, display hint, and
/// navigation target.
#[derive(Debug, Clone)]
pub struct IdResolution {
    pub id: AssetId,
    /// Line number (0-indexed).
    pub line: u32,
    /// Start column (inclusive).
    pub start_col: u32,
    /// End column (exclusive).
    pub end_col: u32,
    pub class: RefClass,
    /// Inline hint text (`→ …`), if the occurrence earned one.
    pub hint: Option<String>,
    pub target: Option<RefTarget>,
}

/// Two-key canonical rank: indentation first, then document order.
///
/// Written as an explicit comparator key so behavior stays well-defined
/// when several occurrences share the minimum indentation.
fn canonical_rank(occ: &IdOccurrence) -> (u32, u32, u32) {
    (occ.indentation, occ.line, occ.start_col)
}

/// For every identifier with more than one occurrence, the index of its
/// canonical occurrence in `scan.ids`.
pub(crate) fn canonical_indices(scan: &DocumentScan) -> FxHashMap<&AssetId, usize> {
    let mut groups: FxHashMap<&AssetId, Vec<usize>> = FxHashMap::default();
    for (i, occ) in scan.ids.iter().enumerate() {
        groups.entry(&occ.id).or_default().push(i);
    }

    let mut canonical = FxHashMap::default();
    for (id, members) in groups {
        if members.len() < 2 {
            continue;
        }
        if let Some(idx) = members
            .into_iter()
            .min_by_key(|&i| canonical_rank(&scan.ids[i]))
        {
            canonical.insert(id, idx);
        }
    }
    canonical
}

/// The label naming a canonical occurrence: its line text up to the
/// identifier, trimmed, with a single trailing `:` or `-` removed.
pub(crate) fn reference_label(occ: &IdOccurrence) -> Option<String> {
    let before = occ.line_text.get(..occ.start_col as usize)?.trim();
    let label = before
        .strip_suffix([':', '-'])
        .map(str::trim_end)
        .unwrap_or(before);
    (!label.is_empty()).then(|| label.to_string())
}

/// Resolve every identifier occurrence in a document.
///
/// Each occurrence is classified into exactly one of
/// [`RefClass::Local`], [`RefClass::Global`], [`RefClass::Unresolved`].
/// The canonical occurrence of a repeated identifier is exempt from Local
/// classification and falls through to the namespace lookup, so a cluster
/// may have an Unresolved anchor with Local members pointing at it.
pub fn resolve_ids(
    scan: &DocumentScan,
    index: &AssetIndex,
    layout: &ProjectLayout,
) -> Vec<IdResolution> {
    let canonical = canonical_indices(scan);

    scan.ids
        .iter()
        .enumerate()
        .map(|(i, occ)| {
            let (class, hint, target) = match canonical.get(&occ.id) {
                Some(&canon_idx) if canon_idx != i => {
                    let canon = &scan.ids[canon_idx];
                    (
                        RefClass::Local,
                        reference_label(canon).map(|label| format!("→ {label}")),
                        Some(RefTarget::InDocument(Position::new(
                            canon.line,
                            canon.start_col,
                        ))),
                    )
                }
                _ => match index.ids.get(&occ.id) {
                    Some(path) => (
                        RefClass::Global,
                        Some(format!("→ {}", layout.display_path(path))),
                        Some(RefTarget::File(path.to_path_buf())),
                    ),
                    None => (RefClass::Unresolved, None, None),
                },
            };

            IdResolution {
                id: occ.id.clone(),
                line: occ.line,
                start_col: occ.start_col,
                end_col: occ.end_col,
                class,
                hint,
                target,
            }
        })
        .collect()
}
