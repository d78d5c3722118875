//! cliniq-store
//!
//! Document store access. [`DocumentStore`] is the seam the analytics
//! engine reads through; two implementations are provided: an in-memory
//! store loaded from JSON and a Tantivy-indexed store.

pub mod error;
pub mod index;
pub mod memory;
pub mod query;
pub mod schema;

use cliniq_core::models::document::Document;

use crate::error::StoreError;
use crate::query::DocumentQuery;

/// Read-only access to the clinical document collection.
pub trait DocumentStore {
    /// Documents matching `query`, ordered by document id.
    fn find(&self, query: &DocumentQuery) -> Result<Vec<Document>, StoreError>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn find(&self, query: &DocumentQuery) -> Result<Vec<Document>, StoreError> {
        (**self).find(query)
    }
}

impl<T: DocumentStore + ?Sized> DocumentStore for Box<T> {
    fn find(&self, query: &DocumentQuery) -> Result<Vec<Document>, StoreError> {
        (**self).find(query)
    }
}
