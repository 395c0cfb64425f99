//! File input/output.

/// CSV export of chart series.
pub mod export;
