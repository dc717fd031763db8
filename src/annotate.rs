//! Part-of-speech annotation.
//!
//! The tagger consumes an [`Annotator`]: a deterministic function from text to
//! `(token, part of speech)` pairs. Heavy models are produced by an
//! [`AnnotatorLoader`] so they can be loaded lazily, once per `Tagger`.
//!
//! [`LexiconAnnotator`] is the bundled implementation. It splits text on
//! Unicode word boundaries and labels tokens from a JSON lexicon, falling back
//! to shape and suffix rules for unknown words.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

/// Universal part-of-speech label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

impl PartOfSpeech {
    /// Canonical upper-case label, e.g. `"PROPN"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
            Self::Space => "SPACE",
        }
    }

    /// NOUN or PROPN.
    #[must_use]
    pub const fn is_noun(self) -> bool {
        matches!(self, Self::Noun | Self::Propn)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let pos = match s.to_ascii_uppercase().as_str() {
            "ADJ" => Self::Adj,
            "ADP" => Self::Adp,
            "ADV" => Self::Adv,
            "AUX" => Self::Aux,
            "CCONJ" => Self::Cconj,
            "DET" => Self::Det,
            "INTJ" => Self::Intj,
            "NOUN" => Self::Noun,
            "NUM" => Self::Num,
            "PART" => Self::Part,
            "PRON" => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM" => Self::Sym,
            "VERB" => Self::Verb,
            "X" => Self::X,
            "SPACE" => Self::Space,
            other => return Err(Error::Annotation(format!("unknown POS label {other:?}"))),
        };
        Ok(pos)
    }
}

/// A token with its part of speech, as produced by an annotator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl AnnotatedToken {
    #[must_use]
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Splits text into tokens and labels each one.
///
/// Implementations must be deterministic: identical text yields identical
/// output.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>>;
}

/// Produces an annotator on first demand.
///
/// Errors surface as [`Error::Annotation`] from the first tagger operation
/// that needs annotation.
pub trait AnnotatorLoader {
    fn load(&self) -> Result<Box<dyn Annotator>>;
}

impl<F> AnnotatorLoader for F
where
    F: Fn() -> Result<Box<dyn Annotator>>,
{
    fn load(&self) -> Result<Box<dyn Annotator>> {
        self()
    }
}

// =============================================================================
// Lexicon annotator
// =============================================================================

/// Closed-class English words shipped with the crate.
const ENGLISH_LEXICON: &[(&str, PartOfSpeech)] = &[
    ("a", PartOfSpeech::Det),
    ("an", PartOfSpeech::Det),
    ("the", PartOfSpeech::Det),
    ("this", PartOfSpeech::Det),
    ("that", PartOfSpeech::Det),
    ("these", PartOfSpeech::Det),
    ("those", PartOfSpeech::Det),
    ("some", PartOfSpeech::Det),
    ("any", PartOfSpeech::Det),
    ("each", PartOfSpeech::Det),
    ("every", PartOfSpeech::Det),
    ("no", PartOfSpeech::Det),
    ("all", PartOfSpeech::Det),
    ("both", PartOfSpeech::Det),
    ("i", PartOfSpeech::Pron),
    ("you", PartOfSpeech::Pron),
    ("he", PartOfSpeech::Pron),
    ("she", PartOfSpeech::Pron),
    ("it", PartOfSpeech::Pron),
    ("we", PartOfSpeech::Pron),
    ("they", PartOfSpeech::Pron),
    ("him", PartOfSpeech::Pron),
    ("her", PartOfSpeech::Pron),
    ("them", PartOfSpeech::Pron),
    ("its", PartOfSpeech::Pron),
    ("their", PartOfSpeech::Pron),
    ("his", PartOfSpeech::Pron),
    ("which", PartOfSpeech::Pron),
    ("who", PartOfSpeech::Pron),
    ("whom", PartOfSpeech::Pron),
    ("whose", PartOfSpeech::Pron),
    ("in", PartOfSpeech::Adp),
    ("on", PartOfSpeech::Adp),
    ("at", PartOfSpeech::Adp),
    ("of", PartOfSpeech::Adp),
    ("to", PartOfSpeech::Adp),
    ("for", PartOfSpeech::Adp),
    ("from", PartOfSpeech::Adp),
    ("by", PartOfSpeech::Adp),
    ("with", PartOfSpeech::Adp),
    ("within", PartOfSpeech::Adp),
    ("without", PartOfSpeech::Adp),
    ("about", PartOfSpeech::Adp),
    ("into", PartOfSpeech::Adp),
    ("over", PartOfSpeech::Adp),
    ("under", PartOfSpeech::Adp),
    ("between", PartOfSpeech::Adp),
    ("through", PartOfSpeech::Adp),
    ("during", PartOfSpeech::Adp),
    ("after", PartOfSpeech::Adp),
    ("before", PartOfSpeech::Adp),
    ("near", PartOfSpeech::Adp),
    ("and", PartOfSpeech::Cconj),
    ("or", PartOfSpeech::Cconj),
    ("but", PartOfSpeech::Cconj),
    ("nor", PartOfSpeech::Cconj),
    ("because", PartOfSpeech::Sconj),
    ("although", PartOfSpeech::Sconj),
    ("while", PartOfSpeech::Sconj),
    ("if", PartOfSpeech::Sconj),
    ("whether", PartOfSpeech::Sconj),
    ("is", PartOfSpeech::Aux),
    ("are", PartOfSpeech::Aux),
    ("was", PartOfSpeech::Aux),
    ("were", PartOfSpeech::Aux),
    ("be", PartOfSpeech::Aux),
    ("been", PartOfSpeech::Aux),
    ("being", PartOfSpeech::Aux),
    ("has", PartOfSpeech::Aux),
    ("have", PartOfSpeech::Aux),
    ("had", PartOfSpeech::Aux),
    ("do", PartOfSpeech::Aux),
    ("does", PartOfSpeech::Aux),
    ("did", PartOfSpeech::Aux),
    ("can", PartOfSpeech::Aux),
    ("could", PartOfSpeech::Aux),
    ("will", PartOfSpeech::Aux),
    ("would", PartOfSpeech::Aux),
    ("may", PartOfSpeech::Aux),
    ("might", PartOfSpeech::Aux),
    ("must", PartOfSpeech::Aux),
    ("should", PartOfSpeech::Aux),
    ("not", PartOfSpeech::Part),
    ("also", PartOfSpeech::Adv),
    ("very", PartOfSpeech::Adv),
    ("there", PartOfSpeech::Adv),
    ("here", PartOfSpeech::Adv),
    ("then", PartOfSpeech::Adv),
    ("now", PartOfSpeech::Adv),
    ("only", PartOfSpeech::Adv),
    ("however", PartOfSpeech::Adv),
    ("many", PartOfSpeech::Adj),
    ("most", PartOfSpeech::Adj),
    ("more", PartOfSpeech::Adj),
    ("other", PartOfSpeech::Adj),
    ("such", PartOfSpeech::Adj),
    ("new", PartOfSpeech::Adj),
    ("large", PartOfSpeech::Adj),
    ("small", PartOfSpeech::Adj),
];

/// On-disk lexicon format: `{"lexicon": {"word": "NOUN", ...}}`.
#[derive(Debug, Deserialize)]
struct LexiconModel {
    lexicon: HashMap<String, PartOfSpeech>,
}

/// Lexicon and rule based annotator.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnnotator {
    lexicon: HashMap<String, PartOfSpeech>,
}

impl LexiconAnnotator {
    /// Builds an annotator from `(word, label)` entries. Words are lowercased.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PartOfSpeech)>,
        S: AsRef<str>,
    {
        let lexicon = entries
            .into_iter()
            .map(|(word, pos)| (word.as_ref().to_lowercase(), pos))
            .collect();
        Self { lexicon }
    }

    /// The bundled English closed-class lexicon.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_LEXICON.iter().copied())
    }

    /// Parses a JSON lexicon model.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: LexiconModel = serde_json::from_str(json)
            .map_err(|err| Error::Annotation(format!("invalid lexicon model: {err}")))?;
        Ok(Self::new(model.lexicon))
    }

    /// Loads a JSON lexicon model from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|err| {
            Error::Annotation(format!("cannot read lexicon model {}: {err}", path.display()))
        })?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Labels one segment. `sentence_start` marks the first word of a
    /// sentence, where capitalization says nothing about proper nouns.
    fn label(&self, token: &str, sentence_start: bool) -> PartOfSpeech {
        if token.chars().all(|c| !c.is_alphanumeric()) {
            return if token.chars().all(is_symbol) {
                PartOfSpeech::Sym
            } else {
                PartOfSpeech::Punct
            };
        }
        if token.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
            return PartOfSpeech::Num;
        }

        let lower = token.to_lowercase();
        if let Some(pos) = self.lexicon.get(&lower) {
            return *pos;
        }
        if !sentence_start && token.chars().next().is_some_and(char::is_uppercase) {
            return PartOfSpeech::Propn;
        }
        suffix_label(&lower)
    }
}

fn is_symbol(c: char) -> bool {
    matches!(c, '$' | '%' | '+' | '<' | '=' | '>' | '^' | '|' | '~' | '#' | '&' | '*' | '@' | '°' | '€' | '£')
}

fn is_sentence_end(segment: &str) -> bool {
    matches!(segment, "." | "!" | "?")
}

fn suffix_label(lower: &str) -> PartOfSpeech {
    const ADVERB: &[&str] = &["ly"];
    const VERB: &[&str] = &["ing", "ed", "ize", "ise"];
    const ADJECTIVE: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less"];

    let ends = |suffixes: &[&str]| {
        suffixes
            .iter()
            .any(|s| lower.len() > s.len() + 2 && lower.ends_with(s))
    };
    if ends(ADVERB) {
        PartOfSpeech::Adv
    } else if ends(VERB) {
        PartOfSpeech::Verb
    } else if ends(ADJECTIVE) {
        PartOfSpeech::Adj
    } else {
        PartOfSpeech::Noun
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>> {
        let mut sentence_start = true;
        Ok(text
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| {
                let pos = self.label(segment, sentence_start);
                if pos != PartOfSpeech::Punct || is_sentence_end(segment) {
                    sentence_start = is_sentence_end(segment);
                }
                AnnotatedToken::new(segment, pos)
            })
            .collect())
    }
}

/// Loads a [`LexiconAnnotator`] from a model file, or the bundled English
/// lexicon when no path is set.
#[derive(Debug, Clone, Default)]
pub struct LexiconLoader {
    pub model_path: Option<PathBuf>,
}

impl LexiconLoader {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: Some(path.into()),
        }
    }
}

impl AnnotatorLoader for LexiconLoader {
    fn load(&self) -> Result<Box<dyn Annotator>> {
        let annotator = match &self.model_path {
            Some(path) => LexiconAnnotator::from_path(path)?,
            None => LexiconAnnotator::english(),
        };
        log::debug!("Loaded lexicon annotator with {} entries", annotator.len());
        Ok(Box::new(annotator))
    }
}
