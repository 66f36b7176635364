//! Identifier resolution tests: classification, tie-breaks, and targets.

use minty::base::Position;
use minty::ide::{RefClass, RefTarget, resolve_ids};
use minty::index::AssetIndex;
use minty::project::ProjectLayout;
use minty::scan::scan_document;

use crate::helpers::documents;
use crate::helpers::fixtures::ProjectFixture;

fn empty_pass() -> (AssetIndex, ProjectLayout) {
    (AssetIndex::default(), ProjectLayout::new(None, None))
}

#[test]
fn every_occurrence_is_classified_exactly_once() {
    let scan = scan_document(documents::LABELED_THEN_BARE);
    let (index, layout) = empty_pass();
    let resolved = resolve_ids(&scan, &index, &layout);
    assert_eq!(resolved.len(), scan.ids.len());
    for resolution in &resolved {
        // The enum makes the classes mutually exclusive; what's left to
        // check is that hints and targets agree with the class.
        match resolution.class {
            RefClass::Local => assert!(resolution.target.is_some()),
            RefClass::Global => assert!(resolution.target.is_some()),
            RefClass::Unresolved => {
                assert!(resolution.hint.is_none());
                assert!(resolution.target.is_none());
            }
        }
    }
}

#[test]
fn bare_deep_reference_is_local_to_labeled_anchor() {
    // Labeled at indentation 0 on line 3, bare at indentation 4 on line 7,
    // no metadata record anywhere.
    let scan = scan_document(documents::LABELED_THEN_BARE);
    let (index, layout) = empty_pass();
    let resolved = resolve_ids(&scan, &index, &layout);

    let anchor = &resolved[0];
    assert_eq!(anchor.line, 3);
    assert_eq!(anchor.class, RefClass::Unresolved);
    assert!(anchor.hint.is_none());

    let reference = &resolved[1];
    assert_eq!(reference.line, 7);
    assert_eq!(reference.class, RefClass::Local);
    assert_eq!(reference.hint.as_deref(), Some("→ foo"));
    assert_eq!(
        reference.target,
        Some(RefTarget::InDocument(Position::new(3, 5)))
    );
}

#[test]
fn metadata_record_makes_single_occurrence_global() {
    let fixture = ProjectFixture::new();
    fixture.write_project_file("assets/tex.png", "png");
    fixture.write_project_meta("assets/tex.png", "FEDCBA9876543210");

    let layout = fixture.layout_without_toolchain();
    let index = AssetIndex::build(&layout);
    let scan = scan_document(documents::SINGLE_REFERENCE);
    let resolved = resolve_ids(&scan, &index, &layout);

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].class, RefClass::Global);
    assert_eq!(resolved[0].hint.as_deref(), Some("→ assets/tex.png"));
    assert_eq!(
        resolved[0].target,
        Some(RefTarget::File(
            fixture.workspace_root().join("assets/tex.png")
        ))
    );
}

#[test]
fn repeated_identifier_prefers_local_over_global() {
    // Even with a metadata record, non-canonical members stay Local.
    let fixture = ProjectFixture::new();
    fixture.write_project_file("a.minty", "asset");
    fixture.write_project_meta("a.minty", "0000000000000001");

    let layout = fixture.layout_without_toolchain();
    let index = AssetIndex::build(&layout);
    let scan = scan_document(documents::LOCAL_CLUSTER);
    let resolved = resolve_ids(&scan, &index, &layout);

    assert_eq!(resolved[0].class, RefClass::Global);
    assert_eq!(resolved[1].class, RefClass::Local);
    assert_eq!(resolved[1].hint.as_deref(), Some("→ anim"));
}

#[test]
fn case_differing_occurrences_form_one_cluster() {
    let scan = scan_document("key: 00000000000000ab\n    00000000000000AB");
    let (index, layout) = empty_pass();
    let resolved = resolve_ids(&scan, &index, &layout);
    assert_eq!(resolved[0].class, RefClass::Unresolved);
    assert_eq!(resolved[1].class, RefClass::Local);
    assert_eq!(resolved[1].hint.as_deref(), Some("→ key"));
}

#[test]
fn same_indentation_ties_break_by_document_order() {
    let scan = scan_document("0000000000000001 0000000000000001\n0000000000000001");
    let (index, layout) = empty_pass();
    let resolved = resolve_ids(&scan, &index, &layout);

    // All three share indentation 0; the first token on line 0 anchors.
    assert_eq!(resolved[0].class, RefClass::Unresolved);
    assert_eq!(resolved[1].class, RefClass::Local);
    assert_eq!(resolved[2].class, RefClass::Local);
    for reference in &resolved[1..] {
        assert_eq!(
            reference.target,
            Some(RefTarget::InDocument(Position::new(0, 0)))
        );
    }
}

#[test]
fn unset_toolchain_root_never_resolves_toolchain_records() {
    let fixture = ProjectFixture::new();
    fixture.write_data_file("Shared/palette.minty", "palette");
    fixture.write_data_meta("Shared/palette.minty", "FEDCBA9876543210");

    // Toolchain root not configured: the record above is invisible.
    let layout = fixture.layout_without_toolchain();
    let index = AssetIndex::build(&layout);
    let scan = scan_document(documents::SINGLE_REFERENCE);
    let resolved = resolve_ids(&scan, &index, &layout);
    assert_eq!(resolved[0].class, RefClass::Unresolved);
}

#[test]
fn resolution_is_idempotent_across_passes() {
    let fixture = ProjectFixture::new();
    fixture.write_project_file("assets/tex.png", "png");
    fixture.write_project_meta("assets/tex.png", "FEDCBA9876543210");

    let layout = fixture.layout_without_toolchain();
    let scan = scan_document(documents::PATH_AND_ID);

    let first = resolve_ids(&scan, &AssetIndex::build(&layout), &layout);
    let second = resolve_ids(&scan, &AssetIndex::build(&layout), &layout);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}
