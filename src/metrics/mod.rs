//! Metrics aggregation and reporting
//!
//! This module provides:
//! - Aggregation of repeated runs per primitive (hdrhistogram)
//! - Text table, JSON and CSV rendering

pub mod reporter;
pub mod summary;

pub use reporter::MetricsReporter;
pub use summary::{summarize, PrimitiveSummary};
