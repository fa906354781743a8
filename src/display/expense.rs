//! Expense display formatting
//!
//! Tables of expenses and the short summary view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, DATE_FORMAT};
use crate::reports::NO_DATA_MESSAGE;
use crate::services::Summary;

use super::text::{label_width, truncate};

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date().format(DATE_FORMAT).to_string(),
            amount: expense.amount().to_string(),
            category: expense.category().to_string(),
            description: truncate(expense.description(), DESCRIPTION_WIDTH),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());

    format!("{}\n{} expense(s)\n", table, expenses.len())
}

/// Format a summary for the terminal
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let Some(totals) = summary.totals() else {
        return format!("{}\n", NO_DATA_MESSAGE);
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Total:    {}\n",
        totals.total.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Average:  {}\n",
        totals.average.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Count:    {}\n", totals.count));
    output.push_str("By category:\n");

    let width = label_width(totals.by_category.keys().map(String::as_str));
    for (category, amount) in &totals.by_category {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            category,
            amount.format_with_symbol(currency_symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::summarize;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-05", "100", "Food", "lunch").unwrap(),
            Expense::new("2024-01-06", "50", "Transport", "bus").unwrap(),
        ]
    }

    #[test]
    fn test_expense_table() {
        let table = format_expense_table(&sample());

        assert!(table.contains("Date"));
        assert!(table.contains("Description"));
        assert!(table.contains("2024-01-05"));
        assert!(table.contains("100.00"));
        assert!(table.contains("Transport"));
        assert!(table.contains("2 expense(s)"));
    }

    #[test]
    fn test_expense_table_empty() {
        assert_eq!(format_expense_table(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_format_summary() {
        let text = format_summary(&summarize(&sample()), "₹");

        assert!(text.contains("Total:    ₹150.00"));
        assert!(text.contains("Average:  ₹75.00"));
        assert!(text.contains("Count:    2"));
        assert!(text.contains("  Food       ₹100.00"));
    }

    #[test]
    fn test_format_summary_no_data() {
        assert_eq!(format_summary(&Summary::NoData, "₹"), "No data available.\n");
    }
}
