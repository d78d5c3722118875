use tracing::{info, warn};

use cliniq_dialogue::{DialogueService, HttpDialogueClient, OfflineDialogue};
use cliniq_export::{ChartRenderer, DirectoryUploader, DocxRenderer, ExportFormat, TextRenderer};
use cliniq_intent::IntentParser;
use cliniq_router::{ImageUrlPattern, Router, Services};
use cliniq_store::DocumentStore;
use cliniq_store::index::IndexStore;
use cliniq_store::memory::MemoryStore;
use cliniq_text::usefulness::TermFilter;

use crate::config::{CliniqConfig, StoreConfig};

/// Collaborators built from configuration, owned for the process lifetime.
pub struct App {
    store: Box<dyn DocumentStore>,
    dialogue: Box<dyn DialogueService>,
    renderer: Box<dyn ChartRenderer>,
    uploader: DirectoryUploader,
    parser: IntentParser,
    terms: TermFilter,
    images: ImageUrlPattern,
}

impl App {
    pub fn from_config(config: &CliniqConfig) -> eyre::Result<Self> {
        let store: Box<dyn DocumentStore> = match &config.store {
            StoreConfig::Memory { path } => {
                let store = MemoryStore::load(path)?;
                info!(path = %path.display(), documents = store.len(), "memory store loaded");
                Box::new(store)
            }
            StoreConfig::Index { path } => {
                let store = IndexStore::open(path)?;
                info!(path = %path.display(), "index store opened");
                Box::new(store)
            }
        };

        let dialogue: Box<dyn DialogueService> =
            match HttpDialogueClient::new(config.dialogue.clone()) {
                Ok(client) => Box::new(client),
                Err(e) => {
                    warn!("dialogue fallback disabled: {e}");
                    Box::new(OfflineDialogue)
                }
            };

        let renderer: Box<dyn ChartRenderer> = match config.export.format {
            ExportFormat::Markdown => {
                Box::new(TextRenderer::new()?.with_precision(config.export.styles.precision))
            }
            ExportFormat::Docx => Box::new(DocxRenderer::new(config.export.styles.clone())),
        };

        let parser = match &config.vocabulary {
            Some(vocabulary) => IntentParser::new(vocabulary.clone()),
            None => IntentParser::default(),
        };
        let terms = match &config.stopwords {
            Some(stopwords) => TermFilter::new(stopwords),
            None => TermFilter::default(),
        };

        Ok(Self {
            store,
            dialogue,
            renderer,
            uploader: DirectoryUploader::new(&config.export.dir, config.export.base_url.clone()),
            parser,
            terms,
            images: ImageUrlPattern::new(&config.image_url_pattern)?,
        })
    }

    pub fn router(&self) -> Router<'_> {
        Router::new(Services {
            store: self.store.as_ref(),
            dialogue: self.dialogue.as_ref(),
            renderer: self.renderer.as_ref(),
            uploader: &self.uploader,
        })
        .with_parser(self.parser.clone())
        .with_terms(self.terms.clone())
        .with_image_pattern(self.images.clone())
    }
}
