//! The article tagger.
//!
//! A [`Tagger`] fetches and cleans one article on construction. Annotation
//! and frequency counting run on first demand and are kept for the life of
//! the instance, so repeated queries with different sizes only re-rank.

use std::borrow::Cow;
use std::cell::OnceCell;
use std::collections::HashSet;
use std::fmt;
use std::io::Write;

use url::Url;

use crate::annotate::{AnnotatedToken, Annotator, AnnotatorLoader, LexiconLoader};
use crate::article::Article;
use crate::error::Result;
use crate::fetch::{article_url, ArticleSource, HttpSource};
use crate::options::Options;
use crate::ranker::{select_tags, FrequencyTable, TokenFrequency};
use crate::stopwords;

/// Extracts keyword tags from a single article.
///
/// # Example
///
/// ```no_run
/// use tagwiki::Tagger;
///
/// let tagger = Tagger::new("Ranomafana_National_Park")?;
/// println!("{}", tagger.title());
/// println!("{:?}", tagger.tags(10)?);
/// # Ok::<(), tagwiki::Error>(())
/// ```
pub struct Tagger {
    article: Article,
    options: Options,
    stopwords: Cow<'static, HashSet<String>>,
    loader: Box<dyn AnnotatorLoader>,
    annotator: OnceCell<Box<dyn Annotator>>,
    tokens: OnceCell<Vec<AnnotatedToken>>,
    table: OnceCell<FrequencyTable>,
}

impl Tagger {
    /// Fetches and cleans `article_id` with default options.
    pub fn new(article_id: &str) -> Result<Self> {
        Self::builder(article_id).build()
    }

    #[must_use]
    pub fn builder(article_id: &str) -> TaggerBuilder {
        TaggerBuilder::new(article_id)
    }

    #[must_use]
    pub fn article(&self) -> &Article {
        &self.article
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.article.title()
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        self.article.url()
    }

    /// Normalized article text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.article.text()
    }

    /// The first `n` characters of the normalized text.
    #[must_use]
    pub fn preview(&self, n: usize) -> &str {
        self.article.preview(n)
    }

    /// [`preview`](Self::preview) with `Options::preview_len` characters.
    #[must_use]
    pub fn preview_default(&self) -> &str {
        self.preview(self.options.preview_len)
    }

    /// Writes the first `n` characters of the text, plus a newline, to `sink`.
    pub fn write_preview<W: Write>(&self, mut sink: W, n: usize) -> Result<()> {
        writeln!(sink, "{}", self.preview(n))?;
        Ok(())
    }

    fn annotator(&self) -> Result<&dyn Annotator> {
        if let Some(annotator) = self.annotator.get() {
            return Ok(annotator.as_ref());
        }
        log::debug!("Loading annotator for {}", self.article.url());
        let loaded = self.loader.load()?;
        Ok(self.annotator.get_or_init(|| loaded).as_ref())
    }

    /// Annotated tokens of the article text, computed once.
    pub fn tokens(&self) -> Result<&[AnnotatedToken]> {
        if let Some(tokens) = self.tokens.get() {
            return Ok(tokens);
        }
        let tokens = self.annotator()?.annotate(self.article.text())?;
        log::debug!("Annotated {} tokens", tokens.len());
        Ok(self.tokens.get_or_init(|| tokens))
    }

    /// Frequency table over the annotated tokens, computed once.
    pub fn frequency_table(&self) -> Result<&FrequencyTable> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let table = FrequencyTable::build(self.tokens()?, &self.stopwords);
        log::debug!(
            "Counted {} retained tokens in {} groups",
            table.total(),
            table.len()
        );
        Ok(self.table.get_or_init(|| table))
    }

    /// The `n` most frequent `(token, part of speech)` groups.
    pub fn most_frequent_tokens(&self, n: usize) -> Result<Vec<TokenFrequency>> {
        Ok(self.frequency_table()?.top(n))
    }

    /// [`most_frequent_tokens`](Self::most_frequent_tokens) with `Options::token_count`.
    pub fn most_frequent_tokens_default(&self) -> Result<Vec<TokenFrequency>> {
        self.most_frequent_tokens(self.options.token_count)
    }

    /// Up to `n` tags: the most frequent alphabetic nouns and proper nouns.
    ///
    /// Selection runs over the whole frequency table, not over the truncated
    /// [`most_frequent_tokens`](Self::most_frequent_tokens) list.
    pub fn tags(&self, n: usize) -> Result<Vec<String>> {
        let table = self.frequency_table()?;
        Ok(select_tags(table.entries(), n))
    }

    /// [`tags`](Self::tags) with `Options::tag_count`.
    pub fn tags_default(&self) -> Result<Vec<String>> {
        self.tags(self.options.tag_count)
    }
}

impl fmt::Debug for Tagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tagger")
            .field("article", &self.article.id())
            .field("title", &self.article.title())
            .field("annotated", &self.tokens.get().is_some())
            .field("ranked", &self.table.get().is_some())
            .finish_non_exhaustive()
    }
}

/// Configures and constructs a [`Tagger`].
///
/// Defaults: [`Options::default`], an [`HttpSource`], the bundled English
/// lexicon annotator and the English stopword list.
pub struct TaggerBuilder {
    article_id: String,
    options: Options,
    source: Option<Box<dyn ArticleSource>>,
    loader: Option<Box<dyn AnnotatorLoader>>,
    stopwords: Option<HashSet<String>>,
}

impl TaggerBuilder {
    #[must_use]
    pub fn new(article_id: &str) -> Self {
        Self {
            article_id: article_id.to_string(),
            options: Options::default(),
            source: None,
            loader: None,
            stopwords: None,
        }
    }

    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replaces the HTTP source, e.g. with a local fixture.
    #[must_use]
    pub fn source(mut self, source: impl ArticleSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Sets how the annotator is loaded on first use.
    #[must_use]
    pub fn annotator_loader(mut self, loader: impl AnnotatorLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Uses an already constructed annotator.
    #[must_use]
    pub fn annotator<A>(self, annotator: A) -> Self
    where
        A: Annotator + Clone + 'static,
    {
        self.annotator_loader(move || -> Result<Box<dyn Annotator>> {
            Ok(Box::new(annotator.clone()))
        })
    }

    /// Replaces the English stopword list. Words are matched in lowercase.
    #[must_use]
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = Some(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect());
        self
    }

    /// Fetches and cleans the article.
    ///
    /// Fails with a fetch error if the article cannot be retrieved and with
    /// `Error::Parse` if it lacks a title or content region. The source is
    /// released before this returns.
    pub fn build(self) -> Result<Tagger> {
        let url = article_url(&self.options.base_url, &self.article_id)?;
        let html = match self.source {
            Some(source) => source.fetch(&url)?,
            None => HttpSource::new(&self.options)?.fetch(&url)?,
        };
        let article = Article::from_html(self.article_id, url, &html)?;

        let stopwords = match self.stopwords {
            Some(words) => Cow::Owned(words),
            None => Cow::Borrowed(stopwords::english()),
        };
        let loader = self
            .loader
            .unwrap_or_else(|| Box::new(LexiconLoader::default()));

        Ok(Tagger {
            article,
            options: self.options,
            stopwords,
            loader,
            annotator: OnceCell::new(),
            tokens: OnceCell::new(),
            table: OnceCell::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{LexiconAnnotator, PartOfSpeech};
    use crate::error::Error;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Fixture(&'static str);

    impl ArticleSource for Fixture {
        fn fetch(&self, _url: &Url) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    const PAGE: &str = r#"<html><head><title>Lemur - Wikipedia</title></head><body>
        <div id="mw-content-text"><div class="mw-parser-output">
          <p>Lemurs live in Madagascar. Lemurs eat fruit [2].</p>
          <table><tr><td>Lemurs Lemurs Lemurs</td></tr></table>
        </div></div></body></html>"#;

    #[test]
    fn build_uses_source_and_cleans() {
        let tagger = Tagger::builder("Lemur")
            .source(Fixture(PAGE))
            .build()
            .expect("tagger");

        assert_eq!(tagger.title(), "Lemur");
        assert_eq!(tagger.url().as_str(), "https://en.wikipedia.org/wiki/Lemur");
        assert_eq!(tagger.text(), "Lemurs live in Madagascar. Lemurs eat fruit .");
    }

    #[test]
    fn loader_runs_once_across_queries() {
        let loads = Rc::new(Cell::new(0));
        let counter = Rc::clone(&loads);
        let tagger = Tagger::builder("Lemur")
            .source(Fixture(PAGE))
            .stopwords(["in"])
            .annotator_loader(move || -> Result<Box<dyn Annotator>> {
                counter.set(counter.get() + 1);
                Ok(Box::new(LexiconAnnotator::english()))
            })
            .build()
            .expect("tagger");

        assert_eq!(loads.get(), 0);
        let first = tagger.tags(3).expect("tags");
        let second = tagger.tags(3).expect("tags");
        let fewer = tagger.tags(1).expect("tags");
        let top = tagger.most_frequent_tokens(1).expect("top");

        assert_eq!(loads.get(), 1);
        assert_eq!(first, second);
        assert_eq!(fewer, vec!["lemurs"]);
        assert_eq!(top[0].token, "lemurs");
        assert_eq!(top[0].pos, PartOfSpeech::Noun);
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn annotation_failure_is_lazy() {
        let tagger = Tagger::builder("Lemur")
            .source(Fixture(PAGE))
            .annotator_loader(|| -> Result<Box<dyn Annotator>> {
                Err(Error::Annotation("model not installed".into()))
            })
            .build()
            .expect("construction does not load the model");

        assert_eq!(tagger.preview(6), "Lemurs");
        assert!(matches!(tagger.tags(5), Err(Error::Annotation(_))));
        assert!(matches!(
            tagger.most_frequent_tokens(5),
            Err(Error::Annotation(_))
        ));
    }

    #[test]
    fn write_preview_appends_newline() {
        let tagger = Tagger::builder("Lemur")
            .source(Fixture(PAGE))
            .build()
            .expect("tagger");
        let mut out = Vec::new();
        tagger.write_preview(&mut out, 6).expect("write");
        assert_eq!(out, b"Lemurs\n");
    }
}
