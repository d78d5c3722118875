//! cliniq-cli library root.
//!
//! Exposes configuration loading and collaborator wiring so integration
//! tests can exercise them without going through the binary.

pub mod app;
pub mod config;
