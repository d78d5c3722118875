use thiserror::Error;
use tracing::error;

use cliniq_charts::error::ChartError;
use cliniq_dialogue::error::DialogueError;
use cliniq_export::error::ExportError;
use cliniq_intent::error::IntentError;
use cliniq_store::error::StoreError;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    UserInput(#[from] IntentError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("rendering failed: {0}")]
    Render(ExportError),

    #[error("upload failed: {0}")]
    Upload(ExportError),

    #[error("dialogue service error: {0}")]
    Dialogue(#[from] DialogueError),

    #[error("invalid image URL pattern: {0}")]
    InvalidPattern(String),
}

pub const NO_RECORDS_MESSAGE: &str =
    "No matching records. Try a wider age range, another sex, or a different keyword.";

pub const STORE_FAILURE_MESSAGE: &str = "Sorry, I could not read the records right now.";

pub const RENDER_FAILURE_MESSAGE: &str = "Sorry, I could not draw the graph right now.";

pub const DIALOGUE_FAILURE_MESSAGE: &str =
    "I don't know what you are talking about. You can submit 'help' to know more about what I can do.";

impl RouterError {
    /// The reply sent to the user in place of a result.
    ///
    /// Input problems are echoed verbatim; service failures are logged and
    /// replaced with a generic message.
    pub fn user_message(&self) -> String {
        match self {
            RouterError::UserInput(e) | RouterError::Chart(ChartError::UserInput(e)) => {
                e.to_string()
            }
            RouterError::Chart(ChartError::NoMatchingRecords) => NO_RECORDS_MESSAGE.to_string(),
            RouterError::Chart(ChartError::Store(e)) | RouterError::Store(e) => {
                error!("store failure: {e}");
                STORE_FAILURE_MESSAGE.to_string()
            }
            RouterError::Render(e) | RouterError::Upload(e) => {
                error!("chart export failure: {e}");
                RENDER_FAILURE_MESSAGE.to_string()
            }
            RouterError::Dialogue(e) => {
                error!("dialogue failure: {e}");
                DIALOGUE_FAILURE_MESSAGE.to_string()
            }
            RouterError::InvalidPattern(e) => {
                error!("configuration failure: {e}");
                RENDER_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
