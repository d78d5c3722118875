use tracing::{debug, info};

use cliniq_charts::{ChartSources, chart_builder};
use cliniq_core::models::chart::ChartKind;
use cliniq_dialogue::DialogueService;
use cliniq_export::{ChartRenderer, Uploader};
use cliniq_intent::IntentParser;
use cliniq_store::DocumentStore;
use cliniq_store::query::DocumentQuery;
use cliniq_text::usefulness::TermFilter;

use crate::context::RequestContext;
use crate::effect::{EFFECT_TERM_LIMIT, co_occurring_terms, effect_reply};
use crate::error::RouterError;
use crate::help::USAGE;
use crate::reply::{ImageUrlPattern, OutboundReply, format_reply};

/// The external collaborators a router talks to.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub store: &'a dyn DocumentStore,
    pub dialogue: &'a dyn DialogueService,
    pub renderer: &'a dyn ChartRenderer,
    pub uploader: &'a dyn Uploader,
}

/// Routes messages to exactly one handler, first match wins:
///
/// 1. help trigger: usage text
/// 2. effect trigger with a keyword: co-occurrence report
/// 3. frequency trigger: chart URL, or a message saying what is missing
/// 4. anything else: dialogue service
pub struct Router<'a> {
    parser: IntentParser,
    terms: TermFilter,
    images: ImageUrlPattern,
    services: Services<'a>,
}

impl<'a> Router<'a> {
    pub fn new(services: Services<'a>) -> Self {
        Self {
            parser: IntentParser::default(),
            terms: TermFilter::default(),
            images: ImageUrlPattern::default(),
            services,
        }
    }

    pub fn with_parser(mut self, parser: IntentParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_terms(mut self, terms: TermFilter) -> Self {
        self.terms = terms;
        self
    }

    pub fn with_image_pattern(mut self, images: ImageUrlPattern) -> Self {
        self.images = images;
        self
    }

    /// Reply text for `message`. Failures become user-facing text.
    pub fn handle(&self, message: &str) -> String {
        let ctx = RequestContext::parse(message, &self.parser);
        self.route(&ctx).unwrap_or_else(|e| e.user_message())
    }

    /// [`handle`](Self::handle), shaped as an image or text reply.
    pub fn respond(&self, message: &str) -> OutboundReply {
        format_reply(&self.handle(message), &self.images)
    }

    pub fn route(&self, ctx: &RequestContext) -> Result<String, RouterError> {
        if self.parser.is_help_request(&ctx.message) {
            info!(route = "help", "routing message");
            return Ok(USAGE.to_string());
        }

        if self.parser.is_effect_request(&ctx.message) {
            if let Some(keyword) = &ctx.filter.keyword {
                info!(route = "effect", %keyword, "routing message");
                return self.effect(keyword);
            }
            debug!("effect trigger without keyword");
        }

        if let Some(kind) = self.parser.parse_chart_request(&ctx.message) {
            let kind = kind?;
            info!(route = "chart", %kind, filter = %ctx.filter.describe(), "routing message");
            return self.chart(kind, ctx);
        }

        info!(route = "dialogue", "routing message");
        self.dialogue(ctx)
    }

    fn effect(&self, keyword: &str) -> Result<String, RouterError> {
        let documents = self.services.store.find(&DocumentQuery::all())?;
        let found = co_occurring_terms(&documents, keyword, &self.terms, EFFECT_TERM_LIMIT);
        Ok(effect_reply(keyword, &found))
    }

    fn chart(&self, kind: ChartKind, ctx: &RequestContext) -> Result<String, RouterError> {
        let sources = ChartSources {
            store: self.services.store,
            terms: &self.terms,
        };
        let payload = chart_builder(kind, &ctx.message, &self.parser, sources)?
            .build_payload(&ctx.filter)?;
        let artifact = self
            .services
            .renderer
            .render(&payload)
            .map_err(RouterError::Render)?;
        self.services
            .uploader
            .upload(&artifact)
            .map_err(RouterError::Upload)
    }

    fn dialogue(&self, ctx: &RequestContext) -> Result<String, RouterError> {
        let interpretation = self.services.dialogue.interpret(&ctx.message)?;

        // Later actions override earlier ones.
        let local = interpretation
            .actions()
            .filter_map(|action| match action {
                "show_info" => Some(format!("Filters are: {}.", ctx.filter.values().join(", "))),
                "unknown" => Some(format!("Did you say: {}?", ctx.message)),
                _ => None,
            })
            .last();

        Ok(local.unwrap_or(interpretation.fulfillment_text))
    }
}
