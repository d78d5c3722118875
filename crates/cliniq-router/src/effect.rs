//! Keyword co-occurrence report.

use std::cmp::Reverse;
use std::collections::HashMap;

use cliniq_core::models::document::Document;
use cliniq_text::usefulness::TermFilter;

/// How many co-occurring terms the report names.
pub const EFFECT_TERM_LIMIT: usize = 5;

/// Useful words that share a sentence with `keyword` across all dated
/// entries, most frequent first.
///
/// Sentences are split on `.`; a sentence qualifies when it contains
/// `keyword` (case-sensitive). Its words are whitespace-separated tokens
/// taken as-is, so `fever,` and `fever` are different words and the first
/// is not useful. The keyword itself never appears in the result. Equal
/// counts keep first-seen order.
pub fn co_occurring_terms(
    documents: &[Document],
    keyword: &str,
    terms: &TermFilter,
    limit: usize,
) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u64> = HashMap::new();

    let sentences = documents
        .iter()
        .flat_map(|doc| &doc.dated_entries)
        .flat_map(|entry| entry.text.split('.'))
        .filter(|sentence| sentence.contains(keyword));

    for word in sentences.flat_map(str::split_whitespace) {
        if terms.is_useful(word) == 0 || word == keyword {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, u64)> = order.into_iter().map(|w| (w, counts[w])).collect();
    ranked.sort_by_key(|&(_, n)| Reverse(n));
    ranked
        .into_iter()
        .take(limit)
        .map(|(w, _)| w.to_string())
        .collect()
}

/// Sentence reporting the co-occurring terms of `keyword`.
pub fn effect_reply(keyword: &str, found: &[String]) -> String {
    if found.is_empty() {
        format!("I could not find anything that occurs together with the keyword {keyword}.")
    } else {
        format!(
            "These things might occur as result, relating to the keyword {keyword}: {}.",
            found.join(", ")
        )
    }
}
