use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::RouterError;

/// Replies that are a bare link to an image on this host are sent as images.
pub const DEFAULT_IMAGE_URL_PATTERN: &str = r"^https?://(i\.)?imgur\.com/.*\.(png|jpg)$";

static DEFAULT_IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_IMAGE_URL_PATTERN)
        .unwrap_or_else(|e| panic!("invalid built-in pattern {DEFAULT_IMAGE_URL_PATTERN:?}: {e}"))
});

/// Which reply strings are image links.
#[derive(Debug, Clone)]
pub struct ImageUrlPattern(Regex);

impl ImageUrlPattern {
    pub fn new(pattern: &str) -> Result<Self, RouterError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|e| RouterError::InvalidPattern(e.to_string()))
    }

    pub fn is_match(&self, reply: &str) -> bool {
        self.0.is_match(reply)
    }
}

impl Default for ImageUrlPattern {
    fn default() -> Self {
        Self(DEFAULT_IMAGE_URL.clone())
    }
}

/// A reply shaped for the messaging channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundReply {
    Image { url: String },
    Text { text: String },
}

pub fn format_reply(reply: &str, images: &ImageUrlPattern) -> OutboundReply {
    if images.is_match(reply) {
        OutboundReply::Image {
            url: reply.to_string(),
        }
    } else {
        OutboundReply::Text {
            text: reply.to_string(),
        }
    }
}
