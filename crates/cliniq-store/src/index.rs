use std::ops::Bound;
use std::path::Path;

use tantivy::collector::DocSetCollector;
use tantivy::query::{AllQuery, BooleanQuery, Occur, Query, RangeQuery, TermQuery};
use tantivy::schema::{IndexRecordOption, Schema, Value};
use tantivy::{Index, IndexWriter, TantivyDocument, Term, doc};
use tracing::{debug, info};

use cliniq_core::error::CoreError;
use cliniq_core::models::document::{DatedEntry, Document, Sex};

use crate::DocumentStore;
use crate::error::StoreError;
use crate::query::DocumentQuery;
use crate::schema::{build_schema, field, get_field};

/// Heap budget for the single indexing thread.
const WRITER_MEMORY_BYTES: usize = 50_000_000;

/// A document store backed by a Tantivy index.
pub struct IndexStore {
    index: Index,
}

impl IndexStore {
    /// Open an existing index directory.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        let index =
            Index::open_in_dir(dir).map_err(|e| StoreError::IndexCorrupted(e.to_string()))?;
        info!(dir = %dir.display(), "opened document index");
        Ok(Self { index })
    }

    /// Create a new index in `dir` holding `documents`.
    pub fn create(dir: &Path, documents: &[Document]) -> Result<Self, StoreError> {
        let index = Index::create_in_dir(dir, build_schema())?;
        write_documents(&index, documents)?;
        info!(dir = %dir.display(), count = documents.len(), "created document index");
        Ok(Self { index })
    }

    /// Build a RAM-only index. Used for tests and one-off imports.
    pub fn in_memory(documents: &[Document]) -> Result<Self, StoreError> {
        let index = Index::create_in_ram(build_schema());
        write_documents(&index, documents)?;
        Ok(Self { index })
    }

    fn build_query(&self, schema: &Schema, query: &DocumentQuery) -> Box<dyn Query> {
        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();

        if let Some(sex) = query.sex {
            let sex_field = get_field(schema, field::SEX);
            clauses.push((
                Occur::Must,
                Box::new(TermQuery::new(
                    Term::from_field_text(sex_field, sex.as_str()),
                    IndexRecordOption::Basic,
                )),
            ));
        }

        if let Some(age) = query.age {
            let age_field = get_field(schema, field::AGE);
            clauses.push((
                Occur::Must,
                Box::new(RangeQuery::new(
                    Bound::Included(Term::from_field_i64(age_field, i64::from(age.low))),
                    Bound::Excluded(Term::from_field_i64(
                        age_field,
                        i64::from(age.end_exclusive()),
                    )),
                )),
            ));
        }

        if clauses.is_empty() {
            Box::new(AllQuery)
        } else {
            Box::new(BooleanQuery::new(clauses))
        }
    }
}

impl DocumentStore for IndexStore {
    fn find(&self, query: &DocumentQuery) -> Result<Vec<Document>, StoreError> {
        let reader = self.index.reader()?;
        let searcher = reader.searcher();
        let schema = self.index.schema();

        let tantivy_query = self.build_query(&schema, query);
        let addresses = searcher.search(tantivy_query.as_ref(), &DocSetCollector)?;

        let mut documents = Vec::with_capacity(addresses.len());
        for address in addresses {
            let doc = searcher.doc::<TantivyDocument>(address)?;
            documents.push(from_tantivy(&schema, &doc)?);
        }
        documents.sort_by_key(|d| d.id);

        debug!(?query, count = documents.len(), "index store query");
        Ok(documents)
    }
}

fn write_documents(index: &Index, documents: &[Document]) -> Result<(), StoreError> {
    let schema = index.schema();
    let id = get_field(&schema, field::ID);
    let sex = get_field(&schema, field::SEX);
    let age = get_field(&schema, field::AGE);
    let text = get_field(&schema, field::TEXT);
    let dated_entries = get_field(&schema, field::DATED_ENTRIES);

    let mut writer: IndexWriter = index.writer_with_num_threads(1, WRITER_MEMORY_BYTES)?;
    for document in documents {
        let entries = serde_json::to_string(&document.dated_entries)?;
        writer.add_document(doc!(
            id => document.id,
            sex => document.sex.as_str(),
            age => i64::from(document.age),
            text => document.text.as_str(),
            dated_entries => entries
        ))?;
    }
    writer.commit()?;
    Ok(())
}

fn from_tantivy(schema: &Schema, doc: &TantivyDocument) -> Result<Document, StoreError> {
    let id = doc
        .get_first(get_field(schema, field::ID))
        .and_then(|v| v.as_u64())
        .ok_or_else(|| CoreError::MissingField(field::ID.to_string()))?;
    let sex = doc
        .get_first(get_field(schema, field::SEX))
        .and_then(|v| v.as_str())
        .ok_or_else(|| CoreError::MissingField(field::SEX.to_string()))?
        .parse::<Sex>()?;
    let age = doc
        .get_first(get_field(schema, field::AGE))
        .and_then(|v| v.as_i64())
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| CoreError::MissingField(field::AGE.to_string()))?;
    let text = doc
        .get_first(get_field(schema, field::TEXT))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let dated_entries: Vec<DatedEntry> = match doc
        .get_first(get_field(schema, field::DATED_ENTRIES))
        .and_then(|v| v.as_str())
    {
        Some(json) => serde_json::from_str(json)?,
        None => Vec::new(),
    };

    Ok(Document {
        id,
        sex,
        age,
        text,
        dated_entries,
    })
}
