//! Reports module
//!
//! Provides the text expense report and the aggregates behind the charts.

pub mod charts;
pub mod expense_report;

pub use charts::{
    amount_histogram, category_shares, daily_totals, CategoryShare, HistogramBin,
    DEFAULT_HISTOGRAM_BINS, MAX_HISTOGRAM_BINS,
};
pub use expense_report::{format_report, report, NO_DATA_MESSAGE};
