//! OCC CLI library components.
//!
//! This crate provides the command-line interface for the configurator
//! normalizer. The main binary is in `main.rs`.

pub mod commands;
pub mod formatters;
pub mod logging;

// Re-export core types for convenience
pub use occ_core::{model, wire};
