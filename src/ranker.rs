//! Token frequency ranking and tag selection.
//!
//! Tokens are counted per `(lowercase text, part of speech)` pair. Ranking is
//! by descending count; equal counts keep the order in which their pair was
//! first seen in the token stream.

use std::collections::{HashMap, HashSet};

use crate::annotate::{AnnotatedToken, PartOfSpeech};

/// Occurrence count of one `(token, part of speech)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFrequency {
    pub token: String,
    pub pos: PartOfSpeech,
    pub count: usize,
}

/// Counts of every retained `(token, part of speech)` pair.
///
/// Stopwords and punctuation are not retained. Entries are kept in
/// first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<TokenFrequency>,
}

impl FrequencyTable {
    /// Counts `tokens`, skipping punctuation and tokens whose lowercase form
    /// is in `exclude`.
    #[must_use]
    pub fn build<'a, I>(tokens: I, exclude: &HashSet<String>) -> Self
    where
        I: IntoIterator<Item = &'a AnnotatedToken>,
    {
        let mut entries: Vec<TokenFrequency> = Vec::new();
        let mut index: HashMap<(String, PartOfSpeech), usize> = HashMap::new();

        for token in tokens {
            if token.pos == PartOfSpeech::Punct {
                continue;
            }
            let lower = token.text.to_lowercase();
            if exclude.contains(&lower) {
                continue;
            }
            match index.get(&(lower.clone(), token.pos)) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert((lower.clone(), token.pos), entries.len());
                    entries.push(TokenFrequency {
                        token: lower,
                        pos: token.pos,
                        count: 1,
                    });
                }
            }
        }

        Self { entries }
    }

    /// Entries in first-encounter order.
    #[must_use]
    pub fn entries(&self) -> &[TokenFrequency] {
        &self.entries
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of retained tokens (sum of all counts).
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// All entries, most frequent first.
    #[must_use]
    pub fn ranked(&self) -> Vec<TokenFrequency> {
        rank(self.entries.iter())
    }

    /// The `n` most frequent entries.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<TokenFrequency> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

fn rank<'a>(entries: impl Iterator<Item = &'a TokenFrequency>) -> Vec<TokenFrequency> {
    let mut ranked: Vec<TokenFrequency> = entries.cloned().collect();
    // sort_by is stable: ties keep first-encounter order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The `n` most frequent `(token, part of speech)` groups of `annotated`.
///
/// Returns an empty list for `n == 0` or empty input.
#[must_use]
pub fn top_tokens_by_frequency(
    annotated: &[AnnotatedToken],
    exclude: &HashSet<String>,
    n: usize,
) -> Vec<TokenFrequency> {
    if n == 0 {
        return Vec::new();
    }
    FrequencyTable::build(annotated, exclude).top(n)
}

fn is_tag_candidate(entry: &TokenFrequency) -> bool {
    !entry.token.is_empty() && entry.token.chars().all(char::is_alphabetic) && entry.pos.is_noun()
}

/// Picks up to `n` tags from counted entries.
///
/// `counted` should be the whole frequency table, not a truncated top list.
/// Only purely alphabetic NOUN/PROPN entries qualify. They are re-ranked by
/// count and a token counted under both noun labels appears once, at its
/// best rank.
#[must_use]
pub fn select_tags(counted: &[TokenFrequency], n: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    rank(counted.iter().filter(|e| is_tag_candidate(e)))
        .into_iter()
        .map(|e| e.token)
        .filter(|token| seen.insert(token.clone()))
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, pos: PartOfSpeech) -> AnnotatedToken {
        AnnotatedToken::new(text, pos)
    }

    fn freq(token: &str, pos: PartOfSpeech, count: usize) -> TokenFrequency {
        TokenFrequency {
            token: token.to_string(),
            pos,
            count,
        }
    }

    fn stopwords(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_build_counts_and_filters() {
        let tokens = vec![
            tok("The", PartOfSpeech::Det),
            tok("Lemur", PartOfSpeech::Noun),
            tok(",", PartOfSpeech::Punct),
            tok("lemur", PartOfSpeech::Noun),
            tok("the", PartOfSpeech::Det),
            tok("Lemur", PartOfSpeech::Propn),
        ];
        let table = FrequencyTable::build(&tokens, &stopwords(&["the"]));

        assert_eq!(
            table.entries(),
            &[
                freq("lemur", PartOfSpeech::Noun, 2),
                freq("lemur", PartOfSpeech::Propn, 1),
            ]
        );
        assert_eq!(table.total(), 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_stopwords_matched_case_insensitively() {
        let tokens = vec![tok("AND", PartOfSpeech::Cconj), tok("forest", PartOfSpeech::Noun)];
        let table = FrequencyTable::build(&tokens, &stopwords(&["and"]));
        assert_eq!(table.entries(), &[freq("forest", PartOfSpeech::Noun, 1)]);
    }

    #[test]
    fn test_top_sorted_with_stable_ties() {
        let tokens = vec![
            tok("rain", PartOfSpeech::Noun),
            tok("forest", PartOfSpeech::Noun),
            tok("park", PartOfSpeech::Noun),
            tok("forest", PartOfSpeech::Noun),
            tok("park", PartOfSpeech::Noun),
            tok("lemur", PartOfSpeech::Noun),
        ];
        let top = top_tokens_by_frequency(&tokens, &HashSet::new(), 3);
        assert_eq!(
            top,
            vec![
                freq("forest", PartOfSpeech::Noun, 2),
                freq("park", PartOfSpeech::Noun, 2),
                freq("rain", PartOfSpeech::Noun, 1),
            ]
        );
    }

    #[test]
    fn test_top_zero_or_empty() {
        let tokens = vec![tok("park", PartOfSpeech::Noun)];
        assert!(top_tokens_by_frequency(&tokens, &HashSet::new(), 0).is_empty());
        assert!(top_tokens_by_frequency(&[], &HashSet::new(), 5).is_empty());
    }

    #[test]
    fn test_top_fewer_groups_than_requested() {
        let tokens = vec![tok("park", PartOfSpeech::Noun), tok("park", PartOfSpeech::Noun)];
        let top = top_tokens_by_frequency(&tokens, &HashSet::new(), 10);
        assert_eq!(top, vec![freq("park", PartOfSpeech::Noun, 2)]);
    }

    #[test]
    fn test_select_tags_filters_shape_and_role() {
        let counted = vec![
            freq("1990", PartOfSpeech::Num, 9),
            freq("run", PartOfSpeech::Verb, 8),
            freq("e-mail", PartOfSpeech::Noun, 7),
            freq("lemur", PartOfSpeech::Noun, 3),
            freq("km2", PartOfSpeech::Noun, 6),
            freq("madagascar", PartOfSpeech::Propn, 5),
        ];
        assert_eq!(select_tags(&counted, 10), vec!["madagascar", "lemur"]);
    }

    #[test]
    fn test_select_tags_reranks_and_truncates() {
        let counted = vec![
            freq("park", PartOfSpeech::Noun, 1),
            freq("species", PartOfSpeech::Noun, 4),
            freq("forest", PartOfSpeech::Noun, 4),
        ];
        assert_eq!(select_tags(&counted, 2), vec!["species", "forest"]);
        assert!(select_tags(&counted, 0).is_empty());
    }

    #[test]
    fn test_select_tags_deduplicates_noun_labels() {
        let counted = vec![
            freq("washington", PartOfSpeech::Propn, 5),
            freq("state", PartOfSpeech::Noun, 3),
            freq("washington", PartOfSpeech::Noun, 2),
        ];
        assert_eq!(select_tags(&counted, 3), vec!["washington", "state"]);
    }

    #[test]
    fn test_select_tags_filters_each_role_entry_separately() {
        let counted = vec![
            freq("run", PartOfSpeech::Verb, 5),
            freq("run", PartOfSpeech::Noun, 1),
            freq("walk", PartOfSpeech::Verb, 4),
        ];
        // a noun entry qualifies even when the token is mostly a verb
        assert_eq!(select_tags(&counted, 5), vec!["run"]);
    }

    #[test]
    fn test_select_tags_accepts_non_ascii_letters() {
        let counted = vec![freq("café", PartOfSpeech::Noun, 2)];
        assert_eq!(select_tags(&counted, 1), vec!["café"]);
    }
}
