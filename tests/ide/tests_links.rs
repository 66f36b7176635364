//! Document link tests: identifier and path navigation targets.

use minty::base::Position;
use minty::ide::{RefTarget, document_links};
use minty::index::AssetIndex;
use minty::project::ProjectLayout;
use minty::scan::scan_document;

use crate::helpers::documents;
use crate::helpers::fixtures::ProjectFixture;

#[test]
fn local_reference_links_to_canonical_position() {
    let scan = scan_document(documents::LABELED_THEN_BARE);
    let index = AssetIndex::default();
    let layout = ProjectLayout::new(None, None);
    let links = document_links(&scan, &index, &layout);

    // Only the deep reference gets a link; the unresolved anchor does not.
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].line, 7);
    assert_eq!(links[0].target, RefTarget::InDocument(Position::new(3, 5)));
    assert_eq!(links[0].tooltip, "Go to line 4");
}

#[test]
fn global_reference_links_to_asset_file() {
    let fixture = ProjectFixture::new();
    fixture.write_project_file("assets/tex.png", "png");
    fixture.write_project_meta("assets/tex.png", "FEDCBA9876543210");

    let layout = fixture.layout_without_toolchain();
    let index = AssetIndex::build(&layout);
    let scan = scan_document(documents::SINGLE_REFERENCE);
    let links = document_links(&scan, &index, &layout);

    assert_eq!(links.len(), 1);
    assert_eq!(
        links[0].target,
        RefTarget::File(fixture.workspace_root().join("assets/tex.png"))
    );
}

#[test]
fn path_token_links_to_resolved_file() {
    let fixture = ProjectFixture::new();
    let file = fixture.write_project_file("assets/tex.png", "png");

    let layout = fixture.layout_without_toolchain();
    let index = AssetIndex::build(&layout);
    let scan = scan_document("texture: assets/tex.png\n");
    let links = document_links(&scan, &index, &layout);

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].target, RefTarget::File(file));
    assert_eq!(links[0].tooltip, "Open assets/tex.png");
}

#[test]
fn unresolved_tokens_produce_no_links() {
    let fixture = ProjectFixture::new();
    let layout = fixture.layout_without_toolchain();
    let index = AssetIndex::build(&layout);
    let scan = scan_document("id: 0123456789ABCDEF path: assets/missing.png\n");
    assert!(document_links(&scan, &index, &layout).is_empty());
}

#[test]
fn path_present_in_both_trees_links_to_project_file() {
    let fixture = ProjectFixture::new();
    let project_file = fixture.write_project_file("shared/palette.minty", "project");
    fixture.write_data_file("shared/palette.minty", "toolchain");

    let layout = fixture.layout();
    let index = AssetIndex::build(&layout);
    let scan = scan_document("palette: shared/palette.minty\n");
    let links = document_links(&scan, &index, &layout);

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].target, RefTarget::File(project_file));
}
