//! Compiled regex patterns for article text cleaning.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace
// =============================================================================

/// Matches runs of two or more spaces.
pub static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("SPACE_RUN regex"));

// =============================================================================
// Annotation Markers
// =============================================================================

/// Matches numeric citation markers such as `[12]`.
pub static CITATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9]+\]").expect("CITATION_MARKER regex"));

/// Matches bare parenthesised numerals such as `(34)`.
pub static PAREN_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([0-9]+\)").expect("PAREN_NUMERAL regex"));

/// Matches single-word alphabetic markers such as `[note]` or `[a]`.
///
/// Multi-word markers like `[citation needed]` contain a space and are kept.
pub static LETTER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[a-zA-Z]+\]").expect("LETTER_MARKER regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_run_ignores_single_spaces() {
        assert!(!SPACE_RUN.is_match("a b c"));
        assert_eq!(SPACE_RUN.replace_all("a    b  c", " "), "a b c");
    }

    #[test]
    fn citation_marker_requires_digits_only() {
        assert!(CITATION_MARKER.is_match("[3]"));
        assert!(CITATION_MARKER.is_match("[123]"));
        assert!(!CITATION_MARKER.is_match("[]"));
        assert!(!CITATION_MARKER.is_match("[3a]"));
    }

    #[test]
    fn paren_numeral_requires_digits_only() {
        assert!(PAREN_NUMERAL.is_match("(34)"));
        assert!(!PAREN_NUMERAL.is_match("(1990s)"));
        assert!(!PAREN_NUMERAL.is_match("(3 km)"));
    }

    #[test]
    fn letter_marker_requires_letters_only() {
        assert!(LETTER_MARKER.is_match("[note]"));
        assert!(LETTER_MARKER.is_match("[b]"));
        assert!(!LETTER_MARKER.is_match("[citation needed]"));
        assert!(!LETTER_MARKER.is_match("[note 1]"));
    }
}
