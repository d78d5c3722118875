use thiserror::Error;

use cliniq_intent::error::IntentError;
use cliniq_store::error::StoreError;
use cliniq_text::error::TextError;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    UserInput(#[from] IntentError),

    #[error("no matching records")]
    NoMatchingRecords,

    #[error("document store error: {0}")]
    Store(#[from] StoreError),
}

impl From<TextError> for ChartError {
    fn from(e: TextError) -> Self {
        match e {
            TextError::EmptyCorpus => ChartError::NoMatchingRecords,
        }
    }
}
