use cliniq_core::models::document::Document;
use cliniq_core::models::filter::Filter;
use cliniq_store::DocumentStore;
use cliniq_store::error::StoreError;
use cliniq_store::query::DocumentQuery;

/// Case-insensitive literal containment of `keyword` in `text`.
/// Always true when no keyword is set.
pub fn matches_keyword(text: &str, keyword: Option<&str>) -> bool {
    match keyword {
        Some(k) => text.to_lowercase().contains(&k.to_lowercase()),
        None => true,
    }
}

/// Documents selected by the filter's sex and age, in store order.
pub fn select_documents(
    store: &dyn DocumentStore,
    filter: &Filter,
) -> Result<Vec<Document>, StoreError> {
    store.find(&DocumentQuery::from(filter))
}

/// Texts of the selected documents that also contain the filter keyword.
pub fn select_texts(store: &dyn DocumentStore, filter: &Filter) -> Result<Vec<String>, StoreError> {
    let keyword = filter.keyword.as_deref();
    Ok(select_documents(store, filter)?
        .into_iter()
        .filter(|d| matches_keyword(&d.text, keyword))
        .map(|d| d.text)
        .collect())
}
