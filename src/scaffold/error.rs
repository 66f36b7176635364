//! Error types for scaffolding operations.

use thiserror::Error;

/// Errors surfaced by user-initiated scaffolding operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The toolchain root was required but `MINTY_PATH` is not set.
    #[error("MINTY_PATH environment variable is not set")]
    ToolchainRootUnset,

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
