pub mod chart;
pub mod document;
pub mod filter;
