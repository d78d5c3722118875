//! Corpus-wide term statistics.
//!
//! Every statistic is derived lazily from the stage before it
//! (`counts → existence / tf → idf → tf-idf`) and computed at most once per
//! [`Corpus`]. Nothing is recomputed or mutated after first access.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::TextError;
use crate::tokenize::{TermCount, term_counts};

/// An ordered, non-empty sequence of texts over which statistics are computed.
#[derive(Debug)]
pub struct Corpus {
    texts: Vec<String>,
    counts: OnceLock<Counts>,
    existence: OnceLock<HashMap<String, usize>>,
    tf: OnceLock<HashMap<String, Vec<f64>>>,
    idf: OnceLock<HashMap<String, f64>>,
    tf_idf: OnceLock<HashMap<String, Vec<f64>>>,
}

#[derive(Debug)]
struct Counts {
    per_doc: Vec<TermCount>,
    per_term: HashMap<String, u64>,
    /// Distinct terms across the corpus, by first appearance.
    terms: Vec<String>,
}

impl Corpus {
    /// Build a corpus. An empty list of texts is rejected: no statistics are
    /// defined over zero documents.
    pub fn new<I, S>(texts: I) -> Result<Self, TextError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        if texts.is_empty() {
            return Err(TextError::EmptyCorpus);
        }
        Ok(Self {
            texts,
            counts: OnceLock::new(),
            existence: OnceLock::new(),
            tf: OnceLock::new(),
            idf: OnceLock::new(),
            tf_idf: OnceLock::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Never true: construction rejects empty corpora.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Distinct terms of the whole corpus in first-appearance order.
    pub fn terms(&self) -> &[String] {
        &self.counts().terms
    }

    /// One term count per document, in corpus order.
    pub fn term_counts_per_doc(&self) -> &[TermCount] {
        &self.counts().per_doc
    }

    /// Total occurrences of each term across all documents.
    pub fn total_count_per_term(&self) -> &HashMap<String, u64> {
        &self.counts().per_term
    }

    /// Number of documents in which each term occurs at least once.
    pub fn doc_existence(&self) -> &HashMap<String, usize> {
        self.existence.get_or_init(|| {
            let counts = self.counts();
            counts
                .terms
                .iter()
                .map(|term| {
                    let docs = counts.per_doc.iter().filter(|tc| tc.contains(term)).count();
                    (term.clone(), docs)
                })
                .collect()
        })
    }

    /// `tf[term][i]`: occurrences of `term` in document `i` divided by the
    /// number of terms in document `i`, or 0 when the term is absent.
    pub fn term_frequency(&self) -> &HashMap<String, Vec<f64>> {
        self.tf.get_or_init(|| {
            let counts = self.counts();
            let totals: Vec<u64> = counts.per_doc.iter().map(TermCount::total).collect();
            counts
                .terms
                .iter()
                .map(|term| {
                    let row = counts
                        .per_doc
                        .iter()
                        .zip(&totals)
                        .map(|(tc, &total)| match tc.get(term) {
                            0 => 0.0,
                            n => n as f64 / total as f64,
                        })
                        .collect();
                    (term.clone(), row)
                })
                .collect()
        })
    }

    /// `idf[term] = ln(corpus_size / doc_existence[term])`.
    pub fn idf(&self) -> &HashMap<String, f64> {
        self.idf.get_or_init(|| {
            let n = self.texts.len() as f64;
            self.doc_existence()
                .iter()
                .map(|(term, &docs)| (term.clone(), (n / docs as f64).ln()))
                .collect()
        })
    }

    /// `tfidf[term][i] = tf[term][i] * idf[term]`.
    pub fn tf_idf(&self) -> &HashMap<String, Vec<f64>> {
        self.tf_idf.get_or_init(|| {
            let idf = self.idf();
            let tf_idf: HashMap<String, Vec<f64>> = self
                .term_frequency()
                .iter()
                .map(|(term, row)| {
                    let weight = idf[term];
                    (term.clone(), row.iter().map(|tf| tf * weight).collect())
                })
                .collect();
            debug!(
                documents = self.texts.len(),
                terms = tf_idf.len(),
                "computed tf-idf"
            );
            tf_idf
        })
    }

    fn counts(&self) -> &Counts {
        self.counts.get_or_init(|| {
            let per_doc: Vec<TermCount> = self.texts.iter().map(|t| term_counts(t)).collect();
            let mut per_term: HashMap<String, u64> = HashMap::new();
            let mut terms = Vec::new();
            for tc in &per_doc {
                for (term, count) in tc.iter() {
                    match per_term.get_mut(term) {
                        Some(total) => *total += count,
                        None => {
                            terms.push(term.to_string());
                            per_term.insert(term.to_string(), count);
                        }
                    }
                }
            }
            Counts {
                per_doc,
                per_term,
                terms,
            }
        })
    }
}
