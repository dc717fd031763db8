//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing just what article
//! extraction needs: the document title, the main content region and its
//! immediate child blocks.

pub use dom_query::{Document, Selection};

use crate::cleaner::{BlockKind, ContentBlock};

/// Id of the element wrapping the rendered article body.
pub const CONTENT_REGION_ID: &str = "mw-content-text";

/// Suffix the site appends to every page title.
pub const TITLE_SUFFIX: &str = " - Wikipedia";

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    sel.text().to_string()
}

/// Classifies a block element.
///
/// Headings rendered inside `<div class="mw-heading mw-headingN">` wrappers
/// are classified by their wrapper class.
#[must_use]
pub fn block_kind(sel: &Selection) -> BlockKind {
    let tag = tag_name(sel).unwrap_or_default();
    if tag == "div" {
        if sel.has_class("mw-heading2") {
            return BlockKind::Heading2;
        }
        if sel.has_class("mw-heading3") {
            return BlockKind::Heading3;
        }
    }
    BlockKind::from_tag(&tag)
}

// === Article Structure ===

/// Document title with the site suffix removed.
#[must_use]
pub fn title(doc: &Document) -> Option<String> {
    let sel = doc.select("title").first();
    if !sel.exists() {
        return None;
    }
    let text = text_content(&sel);
    let text = text.trim();
    Some(text.strip_suffix(TITLE_SUFFIX).unwrap_or(text).trim().to_string())
}

/// The element whose immediate children are the article's blocks.
///
/// This is the first element child of the `#mw-content-text` region.
#[must_use]
pub fn content_root<'a>(doc: &'a Document) -> Option<Selection<'a>> {
    let region = doc.select(&format!("#{CONTENT_REGION_ID}")).first();
    if !region.exists() {
        return None;
    }
    let root = region.children().first();
    root.exists().then_some(root)
}

/// Immediate child blocks of `root`, in document order.
#[must_use]
pub fn content_blocks(root: &Selection) -> Vec<ContentBlock> {
    root.children()
        .iter()
        .map(|child| ContentBlock::new(block_kind(&child), text_content(&child)))
        .collect()
}
