//! cliniq-core
//!
//! Pure domain types shared by every cliniq crate: clinical documents,
//! request filters, and the chart payload handed to rendering.
//! No I/O and no third-party service dependency.

pub mod error;
pub mod models;
