use cliniq_core::models::document::{Document, Sex};
use cliniq_core::models::filter::{AgeRange, Filter};

/// Attribute selection pushed down to the store: equality on sex and a
/// range on age. Keyword matching happens after fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentQuery {
    pub sex: Option<Sex>,
    pub age: Option<AgeRange>,
}

impl DocumentQuery {
    /// Every document in the store.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.sex.is_none_or(|sex| doc.sex == sex)
            && self.age.is_none_or(|age| age.contains(doc.age))
    }
}

impl From<&Filter> for DocumentQuery {
    fn from(filter: &Filter) -> Self {
        Self {
            sex: filter.sex,
            age: Some(filter.age),
        }
    }
}
