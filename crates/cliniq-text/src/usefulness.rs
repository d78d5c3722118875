use std::cmp::Ordering;
use std::collections::HashSet;

use crate::corpus::Corpus;

/// How many terms a single-series (pie / table) chart shows.
pub const RANKED_LIST_LIMIT: usize = 20;

/// How many terms a multi-series (line / bar) chart shows.
pub const MULTI_SERIES_LIMIT: usize = 10;

/// Words that never carry clinical signal on their own: pronouns, sex
/// indicators, filler words, and short unit abbreviations.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "and", "with", "of", "he", "his", "him", "boy", "man", "male", "she", "her", "girl", "lady",
    "female", "ml", "dl", "mmol", "item", "to", "for", "was", "on", "the", "mg", "time", "or",
    "is", "are", "they", "them", "their", "doctor", "hospital", "in", "no", "under", "below",
    "above", "status", "at", "days", "without",
];

/// Heuristic that demotes uninformative terms when ranking.
///
/// Terms judged not useful stay in every statistic; they only sort last.
#[derive(Debug, Clone)]
pub struct TermFilter {
    stopwords: HashSet<String>,
}

impl Default for TermFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl TermFilter {
    /// Build a filter from a stopword list. Entries are compared lowercased.
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// 1 when `term` is worth showing, else 0.
    ///
    /// Single characters, anything with a non-ASCII-letter, and stopwords
    /// (case-insensitively) are not useful.
    pub fn is_useful(&self, term: &str) -> u8 {
        if term.chars().count() <= 1 {
            return 0;
        }
        if !term.chars().all(|c| c.is_ascii_alphabetic()) {
            return 0;
        }
        if self.stopwords.contains(&term.to_lowercase()) {
            return 0;
        }
        1
    }
}

/// The `limit` most salient terms of `corpus`.
///
/// Terms are ordered by `usefulness * -(sum of tf-idf)` ascending, so useful
/// terms with the largest aggregate tf-idf come first. Ties keep the
/// first-appearance order of the corpus.
pub fn rank_terms(corpus: &Corpus, filter: &TermFilter, limit: usize) -> Vec<String> {
    let tf_idf = corpus.tf_idf();
    let mut ranked: Vec<(&str, f64)> = corpus
        .terms()
        .iter()
        .map(|term| {
            let sum: f64 = tf_idf[term].iter().sum();
            let key = f64::from(filter.is_useful(term)) * -sum;
            (term.as_str(), key)
        })
        .collect();

    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(limit)
        .map(|(term, _)| term.to_string())
        .collect()
}
