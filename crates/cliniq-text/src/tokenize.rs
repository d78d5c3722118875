use std::collections::HashMap;

/// Split text into terms on runs of non-word characters.
///
/// Word characters are ASCII letters, digits, and `_`; anything else
/// (including non-ASCII letters) separates terms. Case is preserved.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|term| !term.is_empty())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Occurrence counts of each term in a single text.
///
/// Iteration follows the order in which terms first appear in the text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCount {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl TermCount {
    /// Count of `term`; zero when absent.
    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Sum of all counts, i.e. the number of terms in the text.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|term| (term.as_str(), self.counts[term]))
    }

    fn add(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.order.push(term.to_string());
                self.counts.insert(term.to_string(), 1);
            }
        }
    }
}

/// Count every term of `text`. Empty text yields an empty count.
pub fn term_counts(text: &str) -> TermCount {
    let mut tc = TermCount::default();
    for term in tokenize(text) {
        tc.add(term);
    }
    tc
}
