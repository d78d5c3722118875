use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use cliniq_core::models::chart::ChartKind;

/// A rendered chart, ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Name the artifact after its chart kind and a digest of its content,
    /// so identical renders map to the same file.
    pub fn new(kind: ChartKind, format: ExportFormat, bytes: Vec<u8>) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        Self {
            file_name: format!("{}-{:016x}.{}", kind.as_str(), hasher.finish(), format.extension()),
            content_type: format.content_type().to_string(),
            bytes,
        }
    }
}

/// Output format of rendered charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}
