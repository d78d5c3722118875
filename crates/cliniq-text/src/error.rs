use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("corpus has no documents")]
    EmptyCorpus,
}
