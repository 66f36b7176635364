//! # minty-base
//!
//! Core library for Minty asset scanning, identifier resolution, and
//! cross-reference indexing.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide, scaffold, idgen → editor features, file scaffolding, id generation
//!   ↓
//! index     → namespace maps (identifier index, path index)
//!   ↓
//! project   → workspace layout, toolchain root, file enumeration
//!   ↓
//! meta      → sidecar metadata record parsing
//!   ↓
//! scan      → document scanner (token grammar, occurrences)
//!   ↓
//! base      → primitives (AssetId, Position, Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → scan/meta → project → index → features)
// ============================================================================

/// Foundation types: AssetId, Position, Span
pub mod base;

/// Document scanner: identifier and path token grammar, occurrences
pub mod scan;

/// Sidecar metadata records (`<asset>.meta`)
pub mod meta;

/// Project layout detection and file enumeration
pub mod project;

/// Namespace maps built per resolution pass
pub mod index;

/// Editor features: decorations, document links, hover
pub mod ide;

/// Identifier generation: random and sequential
pub mod idgen;

/// File scaffolding: templates, sidecar creation, asset catalog
pub mod scaffold;

// Re-export foundation types
pub use base::{AssetId, IdClass, Position, Span};
