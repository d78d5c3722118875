use cliniq_core::models::filter::Filter;
use cliniq_intent::IntentParser;

/// Everything known about one message. Built fresh per message and passed
/// down explicitly; nothing carries over to the next message.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub message: String,
    pub filter: Filter,
}

impl RequestContext {
    pub fn parse(message: &str, parser: &IntentParser) -> Self {
        Self {
            message: message.to_string(),
            filter: parser.parse_filter(message),
        }
    }
}
