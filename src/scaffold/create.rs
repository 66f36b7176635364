//! Creation of assets and sidecar metadata files.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::base::{AssetId, IdClass};
use crate::idgen;
use crate::meta;
use crate::project::ProjectLayout;

use super::ScaffoldError;
use super::templates::{TEMPLATES_DIR, Template};

/// A newly scaffolded asset with its sidecar.
#[derive(Debug, Clone)]
pub struct CreatedAsset {
    pub asset_path: PathBuf,
    pub meta_path: PathBuf,
    pub id: AssetId,
}

/// Outcome of a single sidecar-creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaOutcome {
    /// A sidecar was written declaring this identifier.
    Created(AssetId),
    /// The asset already has a sidecar; nothing was written.
    AlreadyExists,
    /// The path is not a regular file (directories are skipped).
    NotAFile,
    /// The path is itself a sidecar file.
    IsMetaFile,
}

/// Aggregate result of a multi-file sidecar-creation request.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    /// Sidecars written, with their identifiers, in request order.
    pub created: Vec<(PathBuf, AssetId)>,
    /// Paths skipped (existing sidecars, directories, sidecar files).
    pub skipped: usize,
    /// Paths that failed with an IO error.
    pub errors: usize,
}

/// Create a sidecar declaring a fresh long identifier for one asset.
///
/// Never overwrites: an existing sidecar is reported, not replaced.
pub fn create_meta_file(path: &Path, rng: &mut impl Rng) -> Result<MetaOutcome, ScaffoldError> {
    if meta::is_meta_file(path) {
        return Ok(MetaOutcome::IsMetaFile);
    }
    if !path.is_file() {
        return Ok(MetaOutcome::NotAFile);
    }
    let meta_path = meta::meta_path_for(path);
    if meta_path.exists() {
        return Ok(MetaOutcome::AlreadyExists);
    }

    let id = idgen::generate_with(IdClass::Long, rng);
    std::fs::write(&meta_path, meta::render_record(&id))?;
    Ok(MetaOutcome::Created(id))
}

/// Create sidecars for a selection of files, isolating failures per item.
pub fn create_meta_files(paths: &[PathBuf], rng: &mut impl Rng) -> ScaffoldReport {
    let mut report = ScaffoldReport::default();
    for path in paths {
        match create_meta_file(path, rng) {
            Ok(MetaOutcome::Created(id)) => report.created.push((path.clone(), id)),
            Ok(_) => report.skipped += 1,
            Err(err) => {
                tracing::debug!("failed to create sidecar for {}: {err}", path.display());
                report.errors += 1;
            }
        }
    }
    report
}

/// Instantiate a template as `<dir>/<name><extension>` with a fresh sidecar.
pub fn instantiate_template(
    layout: &ProjectLayout,
    template: &Template,
    dir: &Path,
    name: &str,
    rng: &mut impl Rng,
) -> Result<CreatedAsset, ScaffoldError> {
    let data_root = layout
        .toolchain_data_root()
        .ok_or(ScaffoldError::ToolchainRootUnset)?;
    let source = data_root.join(TEMPLATES_DIR).join(&template.extension);
    let content = std::fs::read(&source)?;

    let asset_path = dir.join(format!("{name}{}", template.extension));
    let meta_path = meta::meta_path_for(&asset_path);
    let id = idgen::generate_with(IdClass::Long, rng);

    std::fs::write(&meta_path, meta::render_record(&id))?;
    std::fs::write(&asset_path, content)?;

    Ok(CreatedAsset {
        asset_path,
        meta_path,
        id,
    })
}
