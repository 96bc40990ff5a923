//! Shared types for Sales Insights.
//!
//! Holds the transaction and summary models, the error type, the fixed
//! calendar label tables, presentation formatting helpers and the CLI
//! settings used by the binary.

pub mod calendar;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
