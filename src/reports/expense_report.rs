//! Expense Report
//!
//! The fixed text report: total, average, and a per-category breakdown.

use crate::models::Expense;
use crate::services::{summarize, Summary, Totals};

/// Message shown instead of a report when there are no expenses
pub const NO_DATA_MESSAGE: &str = "No data available.";

const TITLE: &str = "------------ EXPENSE REPORT ---------------";
const FOOTER: &str = "-------------------------------------------";

/// Summarize `expenses` and format the result as the text report
pub fn report(expenses: &[Expense], currency_symbol: &str) -> String {
    format_report(&summarize(expenses), currency_symbol)
}

/// Format an existing summary as the text report
pub fn format_report(summary: &Summary, currency_symbol: &str) -> String {
    match summary {
        Summary::NoData => NO_DATA_MESSAGE.to_string(),
        Summary::Totals(totals) => format_totals(totals, currency_symbol),
    }
}

fn format_totals(totals: &Totals, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(TITLE);
    output.push('\n');
    output.push_str(&format!(
        "Total Spending: {}\n",
        totals.total.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Average Spending: {}\n",
        totals.average.format_with_symbol(currency_symbol)
    ));
    output.push('\n');
    output.push_str("Category Breakdown:\n");
    output.push_str(&format_breakdown(totals));
    output.push_str(FOOTER);

    output
}

/// One line per category: name left-aligned, amount right-aligned
fn format_breakdown(totals: &Totals) -> String {
    let name_width = totals
        .by_category
        .keys()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);

    totals
        .by_category
        .iter()
        .map(|(name, amount)| format!("{:<name_width$} {:>12}\n", name, amount))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(date: &str, amount: &str, category: &str) -> Expense {
        Expense::new(date, amount, category, "").unwrap()
    }

    #[test]
    fn test_report_empty() {
        assert_eq!(report(&[], "₹"), "No data available.");
    }

    #[test]
    fn test_report_layout() {
        let expenses = vec![
            expense("2024-01-05", "100", "Food"),
            expense("2024-01-06", "50", "Transport"),
        ];

        let expected = "------------ EXPENSE REPORT ---------------\n\
                        Total Spending: ₹150.00\n\
                        Average Spending: ₹75.00\n\
                        \n\
                        Category Breakdown:\n\
                        Food            100.00\n\
                        Transport        50.00\n\
                        -------------------------------------------";

        assert_eq!(report(&expenses, "₹"), expected);
    }

    #[test]
    fn test_report_uses_currency_symbol() {
        let expenses = vec![expense("2024-01-05", "12.34", "Food")];
        let text = report(&expenses, "$");

        assert!(text.contains("Total Spending: $12.34"));
        assert!(text.contains("Average Spending: $12.34"));
    }
}
