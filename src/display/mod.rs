//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses for terminal display,
//! including tables, the summary view, and text charts.

pub mod chart;
pub mod expense;
pub mod text;

pub use chart::{
    render_bar_chart, render_histogram, render_pie_chart, render_time_series,
    NO_CHART_DATA_MESSAGE,
};
pub use expense::{format_expense_table, format_summary};
