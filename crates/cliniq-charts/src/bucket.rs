//! Bucketing strategies for multi-series charts.
//!
//! Each strategy turns a filtered document set into an ordered list of
//! [`Bucket`]s; the bucket order is the chart's x-axis. Downstream, each
//! bucket's joined text counts as one corpus document.

use tracing::debug;

use cliniq_core::models::chart::Bucket;
use cliniq_core::models::document::{Document, Sex};
use cliniq_core::models::filter::{AgeRange, Filter};
use cliniq_store::DocumentStore;
use cliniq_store::error::StoreError;

use crate::select::{matches_keyword, select_texts};

/// Longest timeline, in entries, kept for date alignment.
pub const MAX_DATE_POSITIONS: usize = 10;

/// Target number of age buckets.
pub const AGE_BUCKETS: u32 = 10;

/// Align documents' dated entries by position.
///
/// Each document's entries are sorted by date and reduced to their text,
/// blanking entries that do not contain `keyword`. Timelines are padded
/// with empty strings or truncated to `min(10, longest timeline)` entries,
/// then position `i` of every document is joined into bucket `i`. Labels
/// are 1-based positions, not calendar dates.
pub fn align_by_date(documents: &[Document], keyword: Option<&str>) -> Vec<Bucket> {
    let timelines: Vec<Vec<&str>> = documents
        .iter()
        .map(|doc| {
            let mut entries: Vec<_> = doc.dated_entries.iter().collect();
            entries.sort_by_key(|e| e.sort_key());
            entries
                .into_iter()
                .map(|e| {
                    if matches_keyword(&e.text, keyword) {
                        e.text.as_str()
                    } else {
                        ""
                    }
                })
                .collect()
        })
        .collect();

    let positions = timelines
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .min(MAX_DATE_POSITIONS);

    let buckets: Vec<Bucket> = (0..positions)
        .map(|i| Bucket {
            label: (i + 1).to_string(),
            text: timelines
                .iter()
                .map(|timeline| timeline.get(i).copied().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect();

    debug!(
        documents = documents.len(),
        positions,
        "aligned timelines by position"
    );
    buckets
}

/// Two buckets, `male` then `female`, each holding the joined texts of
/// documents re-selected with that sex pinned.
pub fn partition_by_sex(
    store: &dyn DocumentStore,
    filter: &Filter,
) -> Result<Vec<Bucket>, StoreError> {
    Sex::ALL
        .into_iter()
        .map(|sex| -> Result<Bucket, StoreError> {
            let pinned = filter.clone().with_sex(Some(sex));
            Ok(Bucket {
                label: sex.to_string(),
                text: select_texts(store, &pinned)?.join(" "),
            })
        })
        .collect()
}

/// One bucket per age sub-range of the filter's range, labeled `"<lower>~"`.
pub fn partition_by_age(
    store: &dyn DocumentStore,
    filter: &Filter,
) -> Result<Vec<Bucket>, StoreError> {
    age_sub_ranges(filter.age)
        .into_iter()
        .map(|range| -> Result<Bucket, StoreError> {
            let pinned = filter.clone().with_age(range);
            Ok(Bucket {
                label: format!("{}~", range.low),
                text: select_texts(store, &pinned)?.join(" "),
            })
        })
        .collect()
}

/// Split `range` into contiguous half-open sub-ranges of width
/// `max(1, len / 10)`. There are `ceil(len / width)` of them and the last one
/// is cut at the end of `range`.
pub fn age_sub_ranges(range: AgeRange) -> Vec<AgeRange> {
    let len = range.len();
    let gap = (len / AGE_BUCKETS).max(1);
    let count = len.div_ceil(gap);
    let end = range.end_exclusive();

    (0..count)
        .map(|k| {
            let low = range.low + k * gap;
            AgeRange::half_open(low, (low + gap).min(end))
        })
        .collect()
}
