use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("dialogue request failed: {0}")]
    Request(String),

    #[error("dialogue service returned status {0}")]
    Status(u16),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("dialogue config error: {0}")]
    Config(String),
}

impl From<ureq::Error> for DialogueError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => DialogueError::Status(code),
            other => DialogueError::Request(other.to_string()),
        }
    }
}
