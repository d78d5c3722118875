use std::path::Path;

use tracing::{debug, info};

use cliniq_core::models::document::Document;

use crate::DocumentStore;
use crate::error::StoreError;
use crate::query::DocumentQuery;

/// A document store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Vec<Document>,
}

impl MemoryStore {
    pub fn new(mut documents: Vec<Document>) -> Self {
        documents.sort_by_key(|d| d.id);
        Self { documents }
    }

    /// Load documents from a JSON file holding either an array of documents
    /// or one document per line.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let documents = parse_documents(&contents)?;
        info!(count = documents.len(), path = %path.display(), "loaded documents");
        Ok(Self::new(documents))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl DocumentStore for MemoryStore {
    fn find(&self, query: &DocumentQuery) -> Result<Vec<Document>, StoreError> {
        let found: Vec<Document> = self
            .documents
            .iter()
            .filter(|d| query.matches(d))
            .cloned()
            .collect();
        debug!(?query, count = found.len(), "memory store query");
        Ok(found)
    }
}

/// Parse a JSON array of documents, or JSON lines.
pub fn parse_documents(contents: &str) -> Result<Vec<Document>, StoreError> {
    let trimmed = contents.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(StoreError::from))
        .collect()
}
