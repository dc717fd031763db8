//! # tagwiki
//!
//! Keyword tags for encyclopedia articles.
//!
//! A [`Tagger`] fetches an article, keeps the text of its paragraphs,
//! headings and lists, strips citation markers, and ranks the article's
//! tokens by frequency. Tags are the most frequent purely alphabetic nouns
//! and proper nouns.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tagwiki::Tagger;
//!
//! let tagger = Tagger::new("Ranomafana_National_Park")?;
//! println!("Title: {}", tagger.title());
//! println!("{}", tagger.preview(200));
//! for freq in tagger.most_frequent_tokens(5)? {
//!     println!("{} {} {}", freq.token, freq.pos, freq.count);
//! }
//! println!("Tags: {:?}", tagger.tags(10)?);
//! # Ok::<(), tagwiki::Error>(())
//! ```
//!
//! ## Offline use
//!
//! The network and the part-of-speech model are both pluggable:
//!
//! ```rust
//! use tagwiki::{ArticleSource, LexiconAnnotator, Tagger};
//! use url::Url;
//!
//! struct Fixture;
//!
//! impl ArticleSource for Fixture {
//!     fn fetch(&self, _url: &Url) -> tagwiki::Result<String> {
//!         Ok(r#"<html><head><title>Lemur - Wikipedia</title></head><body>
//!             <div id="mw-content-text"><div><p>Lemurs live in Madagascar [1].</p></div></div>
//!             </body></html>"#.to_string())
//!     }
//! }
//!
//! let tagger = Tagger::builder("Lemur")
//!     .source(Fixture)
//!     .annotator(LexiconAnnotator::english())
//!     .build()?;
//! assert_eq!(tagger.text(), "Lemurs live in Madagascar .");
//! assert_eq!(tagger.tags(1)?, vec!["lemurs"]);
//! # Ok::<(), tagwiki::Error>(())
//! ```

mod error;
mod options;
mod patterns;

/// Annotator contract and the bundled lexicon annotator.
pub mod annotate;

/// Fetched and cleaned article.
pub mod article;

/// Content block cleaning.
pub mod cleaner;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection for fetched pages.
pub mod encoding;

/// Article retrieval.
pub mod fetch;

/// Frequency ranking and tag selection.
pub mod ranker;

/// Process-wide stopword list.
pub mod stopwords;

/// The tagger orchestrator.
pub mod tagger;

// Public API - re-exports
pub use annotate::{AnnotatedToken, Annotator, AnnotatorLoader, LexiconAnnotator, LexiconLoader, PartOfSpeech};
pub use article::Article;
pub use cleaner::{clean, BlockKind, ContentBlock};
pub use error::{Error, Result};
pub use fetch::{article_url, ArticleSource, HttpSource};
pub use options::{Options, DEFAULT_BASE_URL};
pub use ranker::{select_tags, top_tokens_by_frequency, FrequencyTable, TokenFrequency};
pub use tagger::{Tagger, TaggerBuilder};
