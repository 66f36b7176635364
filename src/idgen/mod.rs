//! Identifier generation.
//!
//! Fresh identifiers draw each hex digit independently and uniformly; no
//! uniqueness check is made against existing identifiers, that is the
//! caller's concern. Sequential generation numbers only the short (16-digit)
//! namespace of a single document.

use rand::Rng;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::{AssetId, IdClass};
use crate::scan;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Generate a fresh identifier of the given class using `rng`.
pub fn generate_with(class: IdClass, rng: &mut impl Rng) -> AssetId {
    let text: String = (0..class.digits())
        .map(|_| HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char)
        .collect();
    AssetId::from_canonical(SmolStr::new(text))
}

/// Generate a fresh short (16-digit) identifier.
pub fn generate_short() -> AssetId {
    generate_with(IdClass::Short, &mut rand::rng())
}

/// Generate a fresh long (32-digit) identifier.
pub fn generate_long() -> AssetId {
    generate_with(IdClass::Long, &mut rand::rng())
}

/// The next free sequential short identifier for a document.
///
/// Interprets every 16-digit hex token in the document as an integer and
/// returns the smallest integer >= 1 not among them, rendered as a
/// zero-padded short identifier. The namespace maps are not consulted.
pub fn next_sequential(document_text: &str) -> AssetId {
    let used: FxHashSet<u64> = scan::short_ids_in(document_text).into_iter().collect();
    let mut next = 1u64;
    while used.contains(&next) {
        next += 1;
    }
    AssetId::from_u64(next)
}
