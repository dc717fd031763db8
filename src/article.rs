//! A fetched and cleaned article.

use url::Url;

use crate::cleaner::{clean, ContentBlock};
use crate::dom;
use crate::error::{Error, Result};

/// An article after fetching and cleaning.
///
/// The normalized text is computed once in [`Article::from_html`] and never
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct Article {
    id: String,
    url: Url,
    title: String,
    blocks: Vec<ContentBlock>,
    text: String,
}

impl Article {
    /// Parses an article page and cleans its body text.
    ///
    /// Fails with [`Error::Parse`] when the page has no `<title>` or no main
    /// content region.
    pub fn from_html(id: impl Into<String>, url: Url, html: &str) -> Result<Self> {
        let doc = dom::parse(html);

        let title = dom::title(&doc)
            .ok_or_else(|| Error::Parse(format!("no <title> in {url}")))?;
        let root = dom::content_root(&doc).ok_or_else(|| {
            Error::Parse(format!(
                "no #{} content region in {url}",
                dom::CONTENT_REGION_ID
            ))
        })?;

        let blocks = dom::content_blocks(&root);
        let text = clean(&blocks);
        log::debug!(
            "Article {title:?}: {} blocks, {} chars of text",
            blocks.len(),
            text.len()
        );

        Ok(Self {
            id: id.into(),
            url,
            title,
            blocks,
            text,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw content blocks, including the ones cleaning discards.
    #[must_use]
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Normalized article text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The first `n` characters of the normalized text.
    #[must_use]
    pub fn preview(&self, n: usize) -> &str {
        match self.text.char_indices().nth(n) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://en.wikipedia.org/wiki/Lemur").expect("url")
    }

    #[test]
    fn from_html_requires_title() {
        let html = r#"<div id="mw-content-text"><div><p>x</p></div></div>"#;
        let err = Article::from_html("Lemur", url(), html).expect_err("no title");
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn from_html_requires_content_region() {
        let html = "<html><head><title>Lemur - Wikipedia</title></head><body></body></html>";
        let err = Article::from_html("Lemur", url(), html).expect_err("no region");
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let html = r#"<html><head><title>Café - Wikipedia</title></head><body>
            <div id="mw-content-text"><div><p>Café société</p></div></div></body></html>"#;
        let article = Article::from_html("Caf%C3%A9", url(), html).expect("article");

        assert_eq!(article.title(), "Café");
        assert_eq!(article.preview(4), "Café");
        assert_eq!(article.preview(0), "");
        assert_eq!(article.preview(1000), "Café société");
    }
}
