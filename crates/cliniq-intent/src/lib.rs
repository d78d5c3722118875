//! cliniq-intent
//!
//! Reads a free-text message and pulls out what the user asked for: the
//! demographic filter, an optional keyword, the requested chart kind, and
//! the attribute a multi-series chart is grouped on.

pub mod error;
pub mod parser;
pub mod patterns;
pub mod vocabulary;

pub use parser::{IntentParser, parse_age, parse_keyword};
