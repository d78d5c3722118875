//! Chart payload assembly.
//!
//! Pie and table charts rank terms over the selected documents and show raw
//! counts. Line and bar charts rank terms over bucket texts and show each
//! term's frequency per bucket.

use tracing::info;

use cliniq_core::models::chart::{Bucket, ChartKind, ChartPayload, ChartRow, Grouping, RowValues};
use cliniq_core::models::filter::Filter;
use cliniq_intent::IntentParser;
use cliniq_store::DocumentStore;
use cliniq_text::corpus::Corpus;
use cliniq_text::usefulness::{MULTI_SERIES_LIMIT, RANKED_LIST_LIMIT, TermFilter, rank_terms};

use crate::bucket::{align_by_date, partition_by_age, partition_by_sex};
use crate::error::ChartError;
use crate::select::{select_documents, select_texts};

/// Builds the payload for one chart kind.
pub trait ChartBuilder {
    fn kind(&self) -> ChartKind;

    /// Chart data for `filter`; the filter's keyword scopes the selection.
    fn build_payload(&self, filter: &Filter) -> Result<ChartPayload, ChartError>;
}

/// What every chart reads from: the document store and the term filter.
#[derive(Clone, Copy)]
pub struct ChartSources<'a> {
    pub store: &'a dyn DocumentStore,
    pub terms: &'a TermFilter,
}

/// Select the builder for `kind`. Line and bar charts also read their
/// grouping attribute from `message`; a missing one is a user error.
pub fn chart_builder<'a>(
    kind: ChartKind,
    message: &str,
    parser: &IntentParser,
    sources: ChartSources<'a>,
) -> Result<Box<dyn ChartBuilder + 'a>, ChartError> {
    let builder: Box<dyn ChartBuilder + 'a> = match kind {
        ChartKind::Pie => Box::new(PieChart { sources }),
        ChartKind::Table => Box::new(TableChart { sources }),
        ChartKind::Line => Box::new(LineChart {
            sources,
            axis: parser.parse_line_axis(message)?,
        }),
        ChartKind::Bar => Box::new(BarChart {
            sources,
            grouping: parser.parse_bar_grouping(message)?,
        }),
    };
    Ok(builder)
}

pub struct PieChart<'a> {
    pub sources: ChartSources<'a>,
}

impl ChartBuilder for PieChart<'_> {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn build_payload(&self, filter: &Filter) -> Result<ChartPayload, ChartError> {
        let rows = ranked_rows(self.sources, filter)?;
        Ok(payload(
            ChartKind::Pie,
            format!("Term count with {}", filter.describe()),
            Vec::new(),
            rows,
        ))
    }
}

pub struct TableChart<'a> {
    pub sources: ChartSources<'a>,
}

impl ChartBuilder for TableChart<'_> {
    fn kind(&self) -> ChartKind {
        ChartKind::Table
    }

    fn build_payload(&self, filter: &Filter) -> Result<ChartPayload, ChartError> {
        let mut rows = ranked_rows(self.sources, filter)?;
        rows.sort_by_key(|row| std::cmp::Reverse(row_count(row)));
        Ok(payload(
            ChartKind::Table,
            format!("Words with {}", filter.describe()),
            Vec::new(),
            rows,
        ))
    }
}

pub struct LineChart<'a> {
    pub sources: ChartSources<'a>,
    pub axis: Grouping,
}

impl ChartBuilder for LineChart<'_> {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn build_payload(&self, filter: &Filter) -> Result<ChartPayload, ChartError> {
        let buckets = buckets_for(self.axis, self.sources, filter)?;
        series_payload(ChartKind::Line, self.axis, buckets, self.sources.terms, filter)
    }
}

pub struct BarChart<'a> {
    pub sources: ChartSources<'a>,
    pub grouping: Grouping,
}

impl ChartBuilder for BarChart<'_> {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn build_payload(&self, filter: &Filter) -> Result<ChartPayload, ChartError> {
        let buckets = buckets_for(self.grouping, self.sources, filter)?;
        series_payload(ChartKind::Bar, self.grouping, buckets, self.sources.terms, filter)
    }
}

fn row_count(row: &ChartRow) -> u64 {
    match row.values {
        RowValues::Count(n) => n,
        RowValues::Series(_) => 0,
    }
}

fn buckets_for(
    grouping: Grouping,
    sources: ChartSources<'_>,
    filter: &Filter,
) -> Result<Vec<Bucket>, ChartError> {
    let buckets = match grouping {
        Grouping::Date => {
            let documents = select_documents(sources.store, filter)?;
            align_by_date(&documents, filter.keyword.as_deref())
        }
        Grouping::Sex => partition_by_sex(sources.store, filter)?,
        Grouping::Age => partition_by_age(sources.store, filter)?,
    };
    Ok(buckets)
}

/// Top terms of the selected documents with their raw occurrence counts.
fn ranked_rows(sources: ChartSources<'_>, filter: &Filter) -> Result<Vec<ChartRow>, ChartError> {
    let corpus = Corpus::new(select_texts(sources.store, filter)?)?;
    if corpus.terms().is_empty() {
        return Err(ChartError::NoMatchingRecords);
    }
    let totals = corpus.total_count_per_term();

    Ok(rank_terms(&corpus, sources.terms, RANKED_LIST_LIMIT)
        .into_iter()
        .map(|term| ChartRow {
            values: RowValues::Count(totals[&term]),
            label: term,
        })
        .collect())
}

/// Top terms across bucket texts with their frequency in each bucket.
fn series_payload(
    kind: ChartKind,
    grouping: Grouping,
    buckets: Vec<Bucket>,
    terms: &TermFilter,
    filter: &Filter,
) -> Result<ChartPayload, ChartError> {
    let (x_labels, texts): (Vec<String>, Vec<String>) =
        buckets.into_iter().map(|b| (b.label, b.text)).unzip();

    let corpus = Corpus::new(texts)?;
    if corpus.terms().is_empty() {
        return Err(ChartError::NoMatchingRecords);
    }
    let tf = corpus.term_frequency();

    let rows = rank_terms(&corpus, terms, MULTI_SERIES_LIMIT)
        .into_iter()
        .map(|term| ChartRow {
            values: RowValues::Series(tf[&term].clone()),
            label: term,
        })
        .collect();

    Ok(payload(
        kind,
        format!("TF over {grouping} with {}", filter.describe()),
        x_labels,
        rows,
    ))
}

fn payload(
    kind: ChartKind,
    title: String,
    x_labels: Vec<String>,
    rows: Vec<ChartRow>,
) -> ChartPayload {
    info!(%kind, rows = rows.len(), series = x_labels.len(), "assembled chart payload");
    ChartPayload {
        kind,
        title,
        x_labels,
        rows,
    }
}
