//! File scaffolding — templates, sidecar creation, and the asset catalog.
//!
//! These are the file-system halves of the user-initiated commands: unlike
//! the bulk resolution passes, errors here surface per file, with aggregate
//! counts when several files are processed at once.

mod assets;
mod create;
mod error;
mod templates;

pub use assets::{AssetEntry, asset_catalog};
pub use create::{CreatedAsset, MetaOutcome, ScaffoldReport, create_meta_file, create_meta_files, instantiate_template};
pub use error::ScaffoldError;
pub use templates::{Template, list_templates};
