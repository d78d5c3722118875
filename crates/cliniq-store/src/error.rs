use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("index corrupted: {0}")]
    IndexCorrupted(String),

    #[error("tantivy error: {0}")]
    Tantivy(#[from] tantivy::TantivyError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(#[from] cliniq_core::error::CoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
