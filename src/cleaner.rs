//! Article text cleaning.
//!
//! Turns the ordered content blocks of an article into one normalized string:
//! only prose-like blocks are kept, line breaks and repeated spaces are
//! flattened and citation-style markers are stripped.

use crate::patterns::{CITATION_MARKER, LETTER_MARKER, PAREN_NUMERAL, SPACE_RUN};

/// Structural kind of a content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// `<p>`
    Paragraph,
    /// `<h2>`
    Heading2,
    /// `<h3>`
    Heading3,
    /// `<ul>`
    UnorderedList,
    /// `<table>`
    Table,
    /// Any other element, by lowercase tag name.
    Other(String),
}

impl BlockKind {
    /// Maps a lowercase tag name onto a block kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "p" => Self::Paragraph,
            "h2" => Self::Heading2,
            "h3" => Self::Heading3,
            "ul" => Self::UnorderedList,
            "table" => Self::Table,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether text of this kind takes part in tagging.
    #[must_use]
    pub fn is_prose(&self) -> bool {
        matches!(
            self,
            Self::Paragraph | Self::Heading2 | Self::Heading3 | Self::UnorderedList
        )
    }
}

/// A structural unit of the article body with its extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub kind: BlockKind,
    pub text: String,
}

impl ContentBlock {
    #[must_use]
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Cleans a block sequence into normalized article text.
///
/// Prose blocks are joined with single spaces, newlines become spaces, and
/// `[12]`, `(34)` and `[note]` markers are removed. Space runs are collapsed
/// both before and after marker removal, so the result never contains a
/// newline or two consecutive spaces. An empty sequence yields `""`.
#[must_use]
pub fn clean(blocks: &[ContentBlock]) -> String {
    let joined = blocks
        .iter()
        .filter(|block| block.kind.is_prose())
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let text = joined.replace('\n', " ");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = CITATION_MARKER.replace_all(&text, "");
    let text = PAREN_NUMERAL.replace_all(&text, "");
    let text = LETTER_MARKER.replace_all(&text, "");

    // Removing a marker between two spaces leaves a double space behind.
    SPACE_RUN.replace_all(&text, " ").into_owned()
}
