//! Scaffolding tests
//!
//! Tests for:
//! - Template discovery (manifest and directory fallback)
//! - Template instantiation
//! - Sidecar creation, single and bulk
//! - The asset catalog
