//! cliniq-text
//!
//! Text analytics over a corpus of clinical narratives: tokenization,
//! per-document term counts, TF / IDF / TF-IDF statistics, and the
//! usefulness heuristic used to rank salient terms.

pub mod corpus;
pub mod error;
pub mod tokenize;
pub mod usefulness;
