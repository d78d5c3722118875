//! cliniq-charts
//!
//! Turns a filter into chart data: selects documents, splits them into
//! buckets for multi-series charts, ranks terms, and assembles the
//! [`ChartPayload`](cliniq_core::models::chart::ChartPayload) handed to rendering.

pub mod assemble;
pub mod bucket;
pub mod error;
pub mod select;

pub use assemble::{ChartBuilder, ChartSources, chart_builder};
