//! Data layer for Sales Insights.
//!
//! Parses CSV exports into transaction records, aggregates them into the
//! summary views used for charting, and loads files from disk.

pub mod aggregator;
pub mod parser;
pub mod reader;

pub use aggregator::aggregate;
pub use insights_core as core;
pub use parser::parse;
