//! Project layout and file enumeration.
//!
//! Resolution passes read two trees: the open project and the shared
//! toolchain data tree named by the `MINTY_PATH` environment variable.
//! [`ProjectLayout`] captures both roots once per pass; the enumeration
//! functions walk them tolerantly (a missing or unreadable directory is an
//! empty result, never an error).

mod files;
mod layout;

pub use files::{collect_asset_files, collect_meta_files};
pub use layout::{ProjectLayout, TOOLCHAIN_ROOT_ENV};
