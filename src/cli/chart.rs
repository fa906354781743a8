//! CLI command for charts

use clap::ValueEnum;

use crate::config::Settings;
use crate::display::{render_bar_chart, render_histogram, render_pie_chart, render_time_series};
use crate::error::ExpenseResult;
use crate::models::Expense;

use super::Session;

/// The available charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Total expenses by category
    Bar,
    /// Spending trend over time
    Line,
    /// Spending distribution by category
    Pie,
    /// Expense amount distribution
    Histogram,
}

/// Render a chart using the chart settings, with an optional bucket count
/// override for the histogram
pub fn render_chart(
    kind: ChartKind,
    expenses: &[Expense],
    settings: &Settings,
    bins: Option<usize>,
) -> String {
    let width = settings.chart_width;
    let symbol = &settings.currency_symbol;

    match kind {
        ChartKind::Bar => render_bar_chart(expenses, width, symbol),
        ChartKind::Line => render_time_series(expenses, width, symbol),
        ChartKind::Pie => render_pie_chart(expenses, width),
        ChartKind::Histogram => {
            render_histogram(expenses, bins.unwrap_or(settings.histogram_bins), width)
        }
    }
}

/// Handle the `chart` command
pub fn handle_chart_command(
    session: &Session,
    kind: ChartKind,
    bins: Option<usize>,
) -> ExpenseResult<()> {
    print!(
        "{}",
        render_chart(kind, session.store.expenses(), &session.settings, bins)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_chart_dispatch() {
        let expenses = vec![Expense::new("2024-01-05", "100", "Food", "").unwrap()];
        let settings = Settings::default();

        assert!(render_chart(ChartKind::Bar, &expenses, &settings, None)
            .starts_with("Total Expenses by Category"));
        assert!(render_chart(ChartKind::Line, &expenses, &settings, None)
            .starts_with("Spending Trend Over Time"));
        assert!(render_chart(ChartKind::Pie, &expenses, &settings, None)
            .starts_with("Spending Distribution by Category"));
        assert!(render_chart(ChartKind::Histogram, &expenses, &settings, Some(3))
            .starts_with("Expense Amount Distribution"));
    }
}
