//! cliniq-export
//!
//! Renders chart payloads into shareable artifacts (Markdown or DOCX) and
//! publishes them behind a URL.

pub mod artifact;
pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
pub mod upload;

pub use artifact::{Artifact, ExportFormat};
pub use docx::DocxRenderer;
pub use render::{ChartRenderer, TextRenderer};
pub use upload::{DirectoryUploader, Uploader};
