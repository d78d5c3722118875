use serde::Serialize;
use tera::{Context, Tera};
use tracing::info;

use cliniq_core::models::chart::{ChartKind, ChartPayload, RowValues};

use crate::artifact::{Artifact, ExportFormat};
use crate::error::ExportError;

/// Turns a chart payload into a publishable artifact.
pub trait ChartRenderer {
    fn render(&self, payload: &ChartPayload) -> Result<Artifact, ExportError>;
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for &T {
    fn render(&self, payload: &ChartPayload) -> Result<Artifact, ExportError> {
        (**self).render(payload)
    }
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for Box<T> {
    fn render(&self, payload: &ChartPayload) -> Result<Artifact, ExportError> {
        (**self).render(payload)
    }
}

const TABLE_TEMPLATE: &str = "# {{ title }}

| Term | Count |
| --- | ---: |
{% for row in rows %}| {{ row.label }} | {{ row.count }} |
{% endfor %}";

const PIE_TEMPLATE: &str = "# {{ title }}

{% for row in rows %}- **{{ row.label }}**: {{ row.count }} ({{ row.share }}%)
{% endfor %}";

const SERIES_TEMPLATE: &str = "# {{ title }}

| Term |{% for x in x_labels %} {{ x }} |{% endfor %}
| --- |{% for x in x_labels %} ---: |{% endfor %}
{% for row in rows %}| {{ row.label }} |{% for v in row.values %} {{ v }} |{% endfor %}
{% endfor %}";

/// Template context for one chart. Numbers are preformatted so templates
/// stay free of arithmetic.
#[derive(Debug, Serialize)]
pub struct ChartView {
    pub kind: ChartKind,
    pub title: String,
    pub x_labels: Vec<String>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Serialize)]
pub struct RowView {
    pub label: String,
    pub count: u64,
    /// Percentage of all counted occurrences, one decimal.
    pub share: String,
    pub values: Vec<String>,
}

impl ChartView {
    pub fn new(payload: &ChartPayload, precision: usize) -> Self {
        let total: u64 = payload
            .rows
            .iter()
            .map(|row| match row.values {
                RowValues::Count(n) => n,
                RowValues::Series(_) => 0,
            })
            .sum();

        let rows = payload
            .rows
            .iter()
            .map(|row| match &row.values {
                RowValues::Count(n) => RowView {
                    label: row.label.clone(),
                    count: *n,
                    share: share(*n, total),
                    values: Vec::new(),
                },
                RowValues::Series(values) => RowView {
                    label: row.label.clone(),
                    count: 0,
                    share: String::new(),
                    values: values.iter().map(|v| format!("{v:.precision$}")).collect(),
                },
            })
            .collect();

        Self {
            kind: payload.kind,
            title: payload.title.clone(),
            x_labels: payload.x_labels.clone(),
            rows,
        }
    }
}

fn share(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", count as f64 * 100.0 / total as f64)
}

/// Markdown renderer driven by one Tera template per chart kind.
pub struct TextRenderer {
    tera: Tera,
    precision: usize,
}

impl TextRenderer {
    pub fn new() -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        for kind in ChartKind::PRIORITY {
            tera.add_raw_template(&template_name(kind), default_template(kind))
                .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        }
        Ok(Self { tera, precision: 3 })
    }

    /// Replace the template used for `kind`.
    pub fn with_template(mut self, kind: ChartKind, content: &str) -> Result<Self, ExportError> {
        self.tera
            .add_raw_template(&template_name(kind), content)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(self)
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Render the payload to Markdown text.
    pub fn render_text(&self, payload: &ChartPayload) -> Result<String, ExportError> {
        let view = ChartView::new(payload, self.precision);
        let context = Context::from_serialize(&view)
            .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
        Ok(self.tera.render(&template_name(payload.kind), &context)?)
    }
}

impl ChartRenderer for TextRenderer {
    fn render(&self, payload: &ChartPayload) -> Result<Artifact, ExportError> {
        let text = self.render_text(payload)?;
        info!(kind = %payload.kind, bytes = text.len(), "rendered chart as markdown");
        Ok(Artifact::new(payload.kind, ExportFormat::Markdown, text.into_bytes()))
    }
}

// `.md` keeps Tera's HTML autoescaping off.
fn template_name(kind: ChartKind) -> String {
    format!("{}.md", kind.as_str())
}

fn default_template(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Table => TABLE_TEMPLATE,
        ChartKind::Pie => PIE_TEMPLATE,
        ChartKind::Line | ChartKind::Bar => SERIES_TEMPLATE,
    }
}
