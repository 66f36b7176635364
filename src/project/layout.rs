use std::path::{Component, Path, PathBuf};

/// Environment variable naming the toolchain installation root.
pub const TOOLCHAIN_ROOT_ENV: &str = "MINTY_PATH";

/// Subdirectory of the toolchain root holding shared asset data.
const TOOLCHAIN_DATA_DIR: &str = "Data";

/// Subproject directories probed for the Base Directory, in order.
const BASE_DIR_CANDIDATES: [&str; 2] = ["Game", "Project"];

/// The directory roots one resolution pass works against.
///
/// Computed once per pass so every lookup in the pass sees the same
/// snapshot of the project shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    workspace_root: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    toolchain_data_root: Option<PathBuf>,
}

impl ProjectLayout {
    /// Build a layout from explicit roots.
    ///
    /// The Base Directory is the workspace's `Game` or `Project`
    /// subdirectory if one exists, otherwise the workspace root itself.
    /// The toolchain data root is `<toolchain_root>/Data`.
    pub fn new(workspace_root: Option<PathBuf>, toolchain_root: Option<PathBuf>) -> Self {
        let base_dir = workspace_root.as_deref().map(detect_base_dir);
        let toolchain_data_root = toolchain_root.map(|root| root.join(TOOLCHAIN_DATA_DIR));
        Self {
            workspace_root,
            base_dir,
            toolchain_data_root,
        }
    }

    /// Build a layout, reading the toolchain root from [`TOOLCHAIN_ROOT_ENV`].
    pub fn discover(workspace_root: Option<PathBuf>) -> Self {
        let toolchain_root = std::env::var_os(TOOLCHAIN_ROOT_ENV).map(PathBuf::from);
        Self::new(workspace_root, toolchain_root)
    }

    /// The open workspace root, if any.
    pub fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }

    /// The effective project root for relative display and path lookup.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// The shared toolchain data tree, if `MINTY_PATH` was configured.
    pub fn toolchain_data_root(&self) -> Option<&Path> {
        self.toolchain_data_root.as_deref()
    }

    /// A path relative to the Base Directory, forward-slash normalized.
    pub fn relative_to_base(&self, path: &Path) -> Option<String> {
        let base = self.base_dir.as_deref()?;
        path.strip_prefix(base).ok().map(forward_slashes)
    }

    /// A path relative to the toolchain data root, forward-slash normalized.
    pub fn relative_to_toolchain(&self, path: &Path) -> Option<String> {
        let data = self.toolchain_data_root.as_deref()?;
        path.strip_prefix(data).ok().map(forward_slashes)
    }

    /// Render a path for display hints and catalogs.
    ///
    /// Base-Directory-relative if the path lies under it, `[Minty]`-marked
    /// data-relative if it lies under the toolchain tree, bare file name
    /// otherwise.
    pub fn display_path(&self, path: &Path) -> String {
        if let Some(rel) = self.relative_to_base(path) {
            return rel;
        }
        if let Some(rel) = self.relative_to_toolchain(path) {
            return format!("[Minty] {rel}");
        }
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn detect_base_dir(root: &Path) -> PathBuf {
    for candidate in BASE_DIR_CANDIDATES {
        let dir = root.join(candidate);
        if dir.is_dir() {
            return dir;
        }
    }
    root.to_path_buf()
}

fn forward_slashes(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}
