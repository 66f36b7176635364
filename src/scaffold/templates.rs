//! Template discovery under the toolchain data tree.
//!
//! Templates live in `<toolchain-data>/Templates`. A manifest file named
//! `.meta` in that directory lists them as `extension, display name` lines;
//! without a readable manifest, the directory listing itself is the
//! template set.

use std::path::Path;

use crate::project::ProjectLayout;

use super::ScaffoldError;

/// Subdirectory of the toolchain data tree holding template files.
pub const TEMPLATES_DIR: &str = "Templates";

/// Manifest file name inside the templates directory.
const MANIFEST_NAME: &str = ".meta";

/// One available template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// The template file's name, doubling as the suffix appended to new
    /// asset names (e.g. `.sprite.minty`).
    pub extension: String,
    /// Name shown when picking a template.
    pub display_name: String,
}

/// List the available templates.
///
/// Requires a configured toolchain root; this is the one enumeration that
/// aborts on missing configuration instead of degrading. A manifest that
/// cannot be read falls back to listing the directory.
pub fn list_templates(layout: &ProjectLayout) -> Result<Vec<Template>, ScaffoldError> {
    let data_root = layout
        .toolchain_data_root()
        .ok_or(ScaffoldError::ToolchainRootUnset)?;
    let dir = data_root.join(TEMPLATES_DIR);

    match std::fs::read_to_string(dir.join(MANIFEST_NAME)) {
        Ok(content) => Ok(parse_manifest(&content)),
        Err(err) => {
            tracing::debug!(
                "template manifest unreadable in {}, listing directory: {err}",
                dir.display()
            );
            list_template_dir(&dir)
        }
    }
}

fn parse_manifest(content: &str) -> Vec<Template> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut columns = line.split(',').map(str::trim);
            let extension = columns.next().unwrap_or_default().to_string();
            let display_name = columns
                .next()
                .filter(|name| !name.is_empty())
                .unwrap_or(&extension)
                .to_string();
            Template {
                extension,
                display_name,
            }
        })
        .collect()
}

fn list_template_dir(dir: &Path) -> Result<Vec<Template>, ScaffoldError> {
    let mut templates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.ends_with(".meta") || name.starts_with('.') {
            continue;
        }
        templates.push(Template {
            extension: name.to_string(),
            display_name: name.to_string(),
        });
    }
    Ok(templates)
}
