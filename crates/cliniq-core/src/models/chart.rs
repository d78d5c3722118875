use std::fmt;

use serde::{Deserialize, Serialize};

/// The chart shapes a frequency request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Table,
    Pie,
    Bar,
}

impl ChartKind {
    /// Order in which keyword sets are tested when a message names several kinds.
    pub const PRIORITY: [ChartKind; 4] =
        [ChartKind::Line, ChartKind::Table, ChartKind::Pie, ChartKind::Bar];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Table => "table",
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
        }
    }

    /// Line and bar charts carry one series per term across buckets.
    pub fn is_multi_series(&self) -> bool {
        matches!(self, ChartKind::Line | ChartKind::Bar)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute a multi-series chart is laid out over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    Sex,
    Age,
    Date,
}

impl Grouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grouping::Sex => "sex",
            Grouping::Age => "age",
            Grouping::Date => "date",
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled sub-corpus: one series position or category of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub text: String,
}

/// Structured chart data handed to an external renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub kind: ChartKind,
    pub title: String,
    /// Empty for ranked-list charts.
    pub x_labels: Vec<String>,
    pub rows: Vec<ChartRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub label: String,
    pub values: RowValues,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowValues {
    /// Raw occurrence count across the corpus (pie and table charts).
    Count(u64),
    /// Term frequency per bucket (line and bar charts).
    Series(Vec<f64>),
}
