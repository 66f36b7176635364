//! Document scanner for Minty text assets.
//!
//! Finds the two token shapes Minty documents cross-reference by:
//! identifier tokens (16 or 32 hex digits on a word boundary) and path
//! tokens (slash-delimited relative paths). Scanning is a pure function of
//! the document text; malformed input never fails, it just yields no
//! matches.

use std::sync::OnceLock;

use regex::Regex;

use crate::base::{AssetId, Span};

/// Identifier token grammar: a 16- or 32-digit hex run on word boundaries.
///
/// The 32-digit alternative is matched greedily, so a 32-digit run is one
/// long identifier rather than two short ones. Runs of any other length
/// match nothing (the trailing boundary fails inside the run).
fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b[0-9a-fA-F]{16}(?:[0-9a-fA-F]{16})?\b").expect("identifier pattern")
    })
}

/// Strictly-short identifier grammar: exactly 16 hex digits.
///
/// A 32-digit run matches neither half, same boundary argument as above.
fn short_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[0-9a-fA-F]{16}\b").expect("short identifier pattern"))
}

/// Path token grammar: one or more `/`-terminated segments of word
/// characters, dots, and hyphens, optionally followed by a bare trailing
/// segment.
fn path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:[0-9A-Za-z_.\-]+/)+[0-9A-Za-z_.\-]*").expect("path pattern")
    })
}

/// One identifier token found in a document.
#[derive(Debug, Clone)]
pub struct IdOccurrence {
    /// The identifier, case-normalized.
    pub id: AssetId,
    /// Line number (0-indexed).
    pub line: u32,
    /// Start column (byte offset, inclusive).
    pub start_col: u32,
    /// End column (byte offset, exclusive).
    pub end_col: u32,
    /// The full text of the line containing the token.
    pub line_text: String,
    /// Count of leading whitespace characters on the line.
    pub indentation: u32,
}

impl IdOccurrence {
    /// The span covered by the token.
    pub fn span(&self) -> Span {
        Span::from_coords(self.line, self.start_col, self.line, self.end_col)
    }
}

/// One path token found in a document.
#[derive(Debug, Clone)]
pub struct PathOccurrence {
    /// The token text as written.
    pub text: String,
    /// Line number (0-indexed).
    pub line: u32,
    /// Start column (byte offset, inclusive).
    pub start_col: u32,
    /// End column (byte offset, exclusive).
    pub end_col: u32,
}

impl PathOccurrence {
    /// The span covered by the token.
    pub fn span(&self) -> Span {
        Span::from_coords(self.line, self.start_col, self.line, self.end_col)
    }
}

/// All tokens found in one document, in document order.
#[derive(Debug, Clone, Default)]
pub struct DocumentScan {
    pub ids: Vec<IdOccurrence>,
    pub paths: Vec<PathOccurrence>,
}

/// Scan a document for identifier and path tokens.
pub fn scan_document(text: &str) -> DocumentScan {
    let mut scan = DocumentScan::default();

    for (line_num, line_text) in text.lines().enumerate() {
        let line = line_num as u32;
        let indentation = line_text.chars().take_while(|c| c.is_whitespace()).count() as u32;

        for m in id_pattern().find_iter(line_text) {
            // The grammar guarantees a parseable 16- or 32-digit run.
            let Some(id) = AssetId::parse(m.as_str()) else {
                continue;
            };
            scan.ids.push(IdOccurrence {
                id,
                line,
                start_col: m.start() as u32,
                end_col: m.end() as u32,
                line_text: line_text.to_string(),
                indentation,
            });
        }

        for m in path_pattern().find_iter(line_text) {
            scan.paths.push(PathOccurrence {
                text: m.as_str().to_string(),
                line,
                start_col: m.start() as u32,
                end_col: m.end() as u32,
            });
        }
    }

    scan
}

/// Collect every strictly-16-digit hex token in a document as an integer.
///
/// Long (32-digit) identifiers do not contribute. Used by sequential
/// identifier generation, which only numbers the short namespace.
pub fn short_ids_in(text: &str) -> Vec<u64> {
    short_id_pattern()
        .find_iter(text)
        .filter_map(|m| u64::from_str_radix(m.as_str(), 16).ok())
        .collect()
}
