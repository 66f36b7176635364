//! AssetIndex construction tests.

use minty::base::AssetId;
use minty::index::AssetIndex;
use minty::project::ProjectLayout;

use crate::helpers::fixtures::ProjectFixture;

fn id(text: &str) -> AssetId {
    AssetId::parse(text).expect("valid test id")
}

#[test]
fn collects_records_from_both_trees() {
    let fixture = ProjectFixture::new();
    fixture.write_project_meta("a.minty", "0000000000000001");
    fixture.write_data_meta("Shared/b.minty", "0000000000000002");

    let index = AssetIndex::build(&fixture.layout());
    assert_eq!(index.ids.len(), 2);
    assert!(index.ids.get(&id("0000000000000001")).is_some());
    assert!(index.ids.get(&id("0000000000000002")).is_some());
}

#[test]
fn project_record_wins_identifier_collision() {
    let fixture = ProjectFixture::new();
    fixture.write_data_meta("Shared/theirs.minty", "0000000000000001");
    fixture.write_project_meta("mine.minty", "0000000000000001");

    let index = AssetIndex::build(&fixture.layout());
    let target = index.ids.get(&id("0000000000000001")).unwrap();
    assert_eq!(target, fixture.workspace_root().join("mine.minty"));
}

#[test]
fn records_discovered_recursively() {
    let fixture = ProjectFixture::new();
    fixture.write_project_meta("a/b/c/deep.minty", "0000000000000001");

    let index = AssetIndex::build(&fixture.layout_without_toolchain());
    assert_eq!(index.ids.len(), 1);
}

#[test]
fn malformed_record_is_skipped_not_fatal() {
    let fixture = ProjectFixture::new();
    fixture.write_project_file("broken.minty.meta", "type: Texture\n");
    fixture.write_project_meta("good.minty", "0000000000000001");

    let index = AssetIndex::build(&fixture.layout_without_toolchain());
    assert_eq!(index.ids.len(), 1);
    assert!(index.ids.get(&id("0000000000000001")).is_some());
}

#[test]
fn missing_roots_yield_an_empty_index() {
    let layout = ProjectLayout::new(
        Some("/nonexistent/workspace".into()),
        Some("/nonexistent/minty".into()),
    );
    let index = AssetIndex::build(&layout);
    assert!(index.ids.is_empty());
    assert!(index.paths.is_empty());
}

#[test]
fn no_workspace_and_no_toolchain_is_fine() {
    let index = AssetIndex::build(&ProjectLayout::new(None, None));
    assert!(index.ids.is_empty());
    assert!(index.paths.is_empty());
}

#[test]
fn path_lookup_prefers_project_over_toolchain() {
    let fixture = ProjectFixture::new();
    let ours = fixture.write_project_file("ui/font.minty", "project");
    fixture.write_data_file("ui/font.minty", "toolchain");

    let index = AssetIndex::build(&fixture.layout());
    assert_eq!(index.paths.resolve("ui/font.minty"), Some(ours.as_path()));
}

#[test]
fn path_lookup_normalizes_backslashes() {
    let fixture = ProjectFixture::new();
    let file = fixture.write_project_file("ui/font.minty", "data");

    let index = AssetIndex::build(&fixture.layout_without_toolchain());
    assert_eq!(
        index.paths.resolve("ui\\font.minty"),
        Some(file.as_path())
    );
}

#[test]
fn path_index_keys_are_relative_to_base_directory() {
    let fixture = ProjectFixture::new();
    // A Game directory makes the base dir <root>/Game.
    let file = fixture.write_project_file("Game/assets/tex.png", "png");

    let index = AssetIndex::build(&fixture.layout_without_toolchain());
    assert_eq!(index.paths.resolve("assets/tex.png"), Some(file.as_path()));
    assert_eq!(index.paths.resolve("Game/assets/tex.png"), None);
}

#[test]
fn sidecar_files_are_not_path_targets() {
    let fixture = ProjectFixture::new();
    fixture.write_project_meta("a.minty", "0000000000000001");

    let index = AssetIndex::build(&fixture.layout_without_toolchain());
    assert_eq!(index.paths.resolve("a.minty.meta"), None);
}

#[test]
fn hidden_trees_are_not_enumerated() {
    let fixture = ProjectFixture::new();
    fixture.write_project_file(".git/objects/blob", "blob");
    fixture.write_project_meta(".hidden/secret.minty", "0000000000000001");

    let index = AssetIndex::build(&fixture.layout_without_toolchain());
    assert!(index.ids.is_empty());
    assert!(index.paths.is_empty());
}

#[test]
fn toolchain_data_files_key_relative_to_data_dir() {
    let fixture = ProjectFixture::new();
    let file = fixture.write_data_file("Shaders/basic.glsl", "glsl");

    let layout = ProjectLayout::new(None, Some(fixture.toolchain_root().to_path_buf()));
    let index = AssetIndex::build(&layout);
    assert_eq!(
        index.paths.resolve("Shaders/basic.glsl"),
        Some(file.as_path())
    );
}

#[test]
fn rebuild_from_unchanged_snapshot_is_identical() {
    let fixture = ProjectFixture::new();
    fixture.write_project_file("assets/tex.png", "png");
    fixture.write_project_meta("assets/tex.png", "FEDCBA9876543210");

    let layout = fixture.layout();
    let first = AssetIndex::build(&layout);
    let second = AssetIndex::build(&layout);

    let collect = |index: &AssetIndex| -> Vec<(AssetId, std::path::PathBuf)> {
        index
            .ids
            .iter()
            .map(|(id, path)| (id.clone(), path.to_path_buf()))
            .collect()
    };
    assert_eq!(collect(&first), collect(&second));
    assert_eq!(
        first.paths.resolve("assets/tex.png"),
        second.paths.resolve("assets/tex.png")
    );
}
