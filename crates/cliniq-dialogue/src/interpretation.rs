use serde::{Deserialize, Serialize};

use crate::error::DialogueError;

/// What the dialogue service made of one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Action tag, possibly several joined with `;`. Empty when none fired.
    pub action: String,
    /// Reply text the service suggests.
    pub fulfillment_text: String,
}

impl Interpretation {
    /// The individual action tags, in order, without empty entries.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.action
            .split(';')
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

/// Wire shape of a query response. Only the fields the router reads are
/// modelled; everything else is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    pub result: Option<QueryResult>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueryResult {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub fulfillment: Fulfillment,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Fulfillment {
    #[serde(default)]
    pub speech: String,
}

impl TryFrom<QueryResponse> for Interpretation {
    type Error = DialogueError;

    fn try_from(response: QueryResponse) -> Result<Self, Self::Error> {
        let result = response
            .result
            .ok_or_else(|| DialogueError::ResponseParse("missing `result` object".to_string()))?;
        Ok(Interpretation {
            action: result.action,
            fulfillment_text: result.fulfillment.speech,
        })
    }
}

/// Parse a raw query response body.
pub fn parse_response(body: &str) -> Result<Interpretation, DialogueError> {
    let response: QueryResponse = serde_json::from_str(body)?;
    Interpretation::try_from(response)
}
