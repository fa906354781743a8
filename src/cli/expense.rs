//! Expense CLI commands
//!
//! Implements the `add` and `list` commands.

use clap::Args;

use crate::display::format_expense_table;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::parse_stored_date;
use crate::models::Money;
use crate::services::{filter, ExpenseFilter, ExpenseService};

use super::Session;

/// Arguments for adding an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense date (YYYY-MM-DD)
    pub date: String,
    /// Amount, strictly positive (e.g., "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category name
    pub category: String,
    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

/// Arguments for listing expenses
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
    /// Category to include; repeat for several (case-insensitive)
    #[arg(short = 'c', long = "category")]
    pub categories: Vec<String>,
    /// Minimum amount, inclusive; 0 means no minimum
    #[arg(long)]
    pub min: Option<String>,
    /// Maximum amount, inclusive; 0 means no maximum
    #[arg(long)]
    pub max: Option<String>,
}

impl ListArgs {
    /// Build the query filter
    ///
    /// Unparsable dates leave that side of the range open; unparsable
    /// amounts are an error.
    pub fn to_filter(&self) -> ExpenseResult<ExpenseFilter> {
        let mut criteria =
            ExpenseFilter::new().with_date_text(self.from.as_deref(), self.to.as_deref());

        if !self.categories.is_empty() {
            criteria = criteria.with_categories(&self.categories);
        }
        if let Some(min) = &self.min {
            criteria = criteria.with_min_amount(parse_bound(min)?);
        }
        if let Some(max) = &self.max {
            criteria = criteria.with_max_amount(parse_bound(max)?);
        }

        Ok(criteria)
    }

    /// Date arguments that will be ignored because they don't parse
    pub fn ignored_dates(&self) -> Vec<&str> {
        [self.from.as_deref(), self.to.as_deref()]
            .into_iter()
            .flatten()
            .filter(|text| parse_stored_date(text).is_none())
            .collect()
    }
}

fn parse_bound(text: &str) -> ExpenseResult<Money> {
    Money::parse(text)
        .map_err(|e| ExpenseError::InvalidAmount(text.to_string(), e.amount_issue()))
}

/// Handle the `add` command
pub fn handle_add_command(session: &mut Session, args: AddArgs) -> ExpenseResult<()> {
    let expense = ExpenseService::new(&mut session.store)
        .with_audit(&session.audit)
        .add(&args.date, &args.amount, &args.category, &args.description)?;

    println!(
        "Expense added: {} {} {}",
        expense.date(),
        expense
            .amount()
            .format_with_symbol(&session.settings.currency_symbol),
        expense.category()
    );
    Ok(())
}

/// Handle the `list` command
pub fn handle_list_command(session: &Session, args: ListArgs) -> ExpenseResult<()> {
    for text in args.ignored_dates() {
        eprintln!("Warning: '{}' is not a valid date; that bound is ignored", text);
    }

    let criteria = args.to_filter()?;
    let matches = filter(session.store.expenses(), &criteria);
    print!("{}", format_expense_table(&matches));
    Ok(())
}
