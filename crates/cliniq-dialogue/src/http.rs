use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use ureq::Agent;

use crate::DialogueService;
use crate::error::DialogueError;
use crate::interpretation::{Interpretation, QueryResponse};

pub const DEFAULT_ENDPOINT: &str = "https://api.api.ai/v1/query?v=20150910";

/// Connection settings for [`HttpDialogueClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    pub endpoint: String,
    /// Client access token, sent as a bearer token.
    pub token: Option<String>,
    pub lang: String,
    pub session_id: String,
    pub timeout_secs: u64,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            lang: "en".to_string(),
            session_id: "cliniq".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Request body of a text query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest<'a> {
    pub query: &'a str,
    pub lang: &'a str,
    pub session_id: &'a str,
}

/// Blocking JSON-over-HTTP client for the hosted dialogue service.
pub struct HttpDialogueClient {
    agent: Agent,
    config: DialogueConfig,
    token: String,
}

impl HttpDialogueClient {
    /// Fails when no access token is configured.
    pub fn new(config: DialogueConfig) -> Result<Self, DialogueError> {
        let token = config
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                DialogueError::Config("no dialogue access token configured".to_string())
            })?;

        let agent = Agent::new_with_config(
            Agent::config_builder()
                .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
                .build(),
        );

        Ok(Self {
            agent,
            config,
            token,
        })
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }
}

impl DialogueService for HttpDialogueClient {
    fn interpret(&self, text: &str) -> Result<Interpretation, DialogueError> {
        let body = QueryRequest {
            query: text,
            lang: &self.config.lang,
            session_id: &self.config.session_id,
        };

        let mut response = self
            .agent
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .send_json(&body)?;

        let parsed: QueryResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| DialogueError::ResponseParse(e.to_string()))?;
        let interpretation = Interpretation::try_from(parsed)?;

        info!(
            action = %interpretation.action,
            reply_len = interpretation.fulfillment_text.len(),
            "dialogue service replied"
        );
        Ok(interpretation)
    }
}
