//! Text chart rendering
//!
//! Draws the four expense charts with block characters. Each renderer
//! returns a short message instead of a chart when there is nothing to draw.

use crate::models::{Expense, Money, DATE_FORMAT};
use crate::reports::{amount_histogram, category_shares, daily_totals};
use crate::services::category_totals;

use super::text::label_width;

/// Shown in place of any chart when the collection is empty
pub const NO_CHART_DATA_MESSAGE: &str = "No data for visualization.";

const FILLED: char = '█';
const UNFILLED: char = '░';
const RULE: char = '─';

/// Total expenses by category
pub fn render_bar_chart(expenses: &[Expense], width: usize, currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return format!("{}\n", NO_CHART_DATA_MESSAGE);
    }

    let totals = category_totals(expenses);
    let max = totals.values().map(Money::as_f64).fold(0.0, f64::max);
    let labels = label_width(totals.keys().map(String::as_str));

    let mut output = chart_header("Total Expenses by Category", labels + width + 16);
    for (category, total) in &totals {
        output.push_str(&format!(
            "{:<labels$} {} {}\n",
            category,
            bar(total.as_f64(), max, width),
            total.format_with_symbol(currency_symbol)
        ));
    }
    output
}

/// Spending per day, oldest first
pub fn render_time_series(expenses: &[Expense], width: usize, currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return format!("{}\n", NO_CHART_DATA_MESSAGE);
    }

    let totals = daily_totals(expenses);
    let max = totals.values().map(Money::as_f64).fold(0.0, f64::max);

    let mut output = chart_header("Spending Trend Over Time", width + 26);
    for (date, total) in &totals {
        output.push_str(&format!(
            "{} {} {}\n",
            date.format(DATE_FORMAT),
            bar(total.as_f64(), max, width),
            total.format_with_symbol(currency_symbol)
        ));
    }
    output
}

/// Share of total spending per category
pub fn render_pie_chart(expenses: &[Expense], width: usize) -> String {
    if expenses.is_empty() {
        return format!("{}\n", NO_CHART_DATA_MESSAGE);
    }

    let shares = category_shares(expenses);
    let labels = label_width(shares.iter().map(|s| s.category.as_str()));

    let mut output = chart_header("Spending Distribution by Category", labels + width + 9);
    for share in &shares {
        output.push_str(&format!(
            "{:<labels$} {} {:>6.1}%\n",
            share.category,
            bar(share.percentage, 100.0, width),
            share.percentage
        ));
    }
    output
}

/// Distribution of expense amounts
pub fn render_histogram(expenses: &[Expense], bins: usize, width: usize) -> String {
    if expenses.is_empty() {
        return format!("{}\n", NO_CHART_DATA_MESSAGE);
    }

    let histogram = amount_histogram(expenses, bins);
    let max = histogram.iter().map(|b| b.count).max().unwrap_or(0) as f64;

    let mut output = chart_header("Expense Amount Distribution", width + 30);
    for bin in &histogram {
        output.push_str(&format!(
            "{:>10.2} - {:<10.2} {} {}\n",
            bin.lower,
            bin.upper,
            bar(bin.count as f64, max, width),
            bin.count
        ));
    }
    output
}

fn chart_header(title: &str, width: usize) -> String {
    let rule: String = std::iter::repeat(RULE).take(width).collect();
    format!("{}\n{}\n", title, rule)
}

/// `width` cells, the first `value / max` of them filled
fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 && value > 0.0 {
        ((value / max * width as f64).round() as usize).min(width)
    } else {
        0
    };

    std::iter::repeat(FILLED)
        .take(filled)
        .chain(std::iter::repeat(UNFILLED).take(width - filled))
        .collect()
}
