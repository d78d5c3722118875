use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid sex value: {0}")]
    InvalidSex(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
