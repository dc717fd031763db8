//! English stopword list.
//!
//! This is the NLTK English list (about 180 function words). It holds no
//! content nouns, so words like "area" or "system" can still become tags.
//!
//! The list is process-wide state built at most once. Hosts may call [`init`]
//! up front to pay the cost at a time of their choosing; otherwise the first
//! call to [`english`] builds it.

use std::collections::HashSet;
use std::sync::OnceLock;

use stop_words::{get, LANGUAGE};

static ENGLISH: OnceLock<HashSet<String>> = OnceLock::new();

/// Builds the English stopword set if it does not exist yet. Idempotent.
pub fn init() {
    let _ = english();
}

/// Whether [`init`] (or [`english`]) has already run in this process.
#[must_use]
pub fn is_initialized() -> bool {
    ENGLISH.get().is_some()
}

/// Lowercase English stopwords.
#[must_use]
pub fn english() -> &'static HashSet<String> {
    ENGLISH.get_or_init(|| {
        let words: HashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        log::debug!("Loaded {} English stopwords", words.len());
        words
    })
}
