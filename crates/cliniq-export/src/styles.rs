use serde::{Deserialize, Serialize};

/// Styling of DOCX chart exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and table cells.
    pub body_font: String,

    /// Font for the chart title.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub title_size: usize,

    /// Decimal places shown for term frequencies.
    pub precision: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            title_size: 16,
            precision: 3,
        }
    }
}
