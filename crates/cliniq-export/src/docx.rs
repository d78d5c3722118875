use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell, TableRow,
};
use tracing::info;

use cliniq_core::models::chart::ChartPayload;

use crate::artifact::{Artifact, ExportFormat};
use crate::error::ExportError;
use crate::render::{ChartRenderer, ChartView};
use crate::styles::DocumentStyles;

/// Renders every chart kind as a titled DOCX table.
///
/// Ranked charts get `Term | Count | Share` columns; multi-series charts get
/// one column per x label.
#[derive(Debug, Clone, Default)]
pub struct DocxRenderer {
    styles: DocumentStyles,
}

impl DocxRenderer {
    pub fn new(styles: DocumentStyles) -> Self {
        Self { styles }
    }
}

impl ChartRenderer for DocxRenderer {
    fn render(&self, payload: &ChartPayload) -> Result<Artifact, ExportError> {
        let bytes = generate_docx(payload, &self.styles)?;
        info!(kind = %payload.kind, bytes = bytes.len(), "rendered chart as docx");
        Ok(Artifact::new(payload.kind, ExportFormat::Docx, bytes))
    }
}

/// Build the DOCX bytes for `payload`.
pub fn generate_docx(
    payload: &ChartPayload,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let view = ChartView::new(payload, styles.precision);

    let header: Vec<String> = if payload.kind.is_multi_series() {
        std::iter::once("Term".to_string())
            .chain(view.x_labels.iter().cloned())
            .collect()
    } else {
        vec!["Term".to_string(), "Count".to_string(), "Share".to_string()]
    };

    let mut rows = vec![table_row(&header, styles, true)];
    for row in &view.rows {
        let cells: Vec<String> = if payload.kind.is_multi_series() {
            std::iter::once(row.label.clone())
                .chain(row.values.iter().cloned())
                .collect()
        } else {
            vec![row.label.clone(), row.count.to_string(), format!("{}%", row.share)]
        };
        rows.push(table_row(&cells, styles, false));
    }

    let docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_paragraph(
            Paragraph::new().style("Title").add_run(
                Run::new()
                    .add_text(&view.title)
                    .fonts(RunFonts::new().ascii(&styles.heading_font)),
            ),
        )
        .add_table(Table::new(rows));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn table_row(cells: &[String], styles: &DocumentStyles, header: bool) -> TableRow {
    TableRow::new(
        cells
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let mut run = Run::new()
                    .add_text(text)
                    .size(styles.body_size * 2)
                    .fonts(RunFonts::new().ascii(&styles.body_font));
                if header {
                    run = run.bold();
                }
                let align = if i == 0 {
                    AlignmentType::Left
                } else {
                    AlignmentType::Right
                };
                TableCell::new().add_paragraph(Paragraph::new().align(align).add_run(run))
            })
            .collect(),
    )
}
