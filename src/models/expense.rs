//! Expense model
//!
//! An expense is a dated, categorized, strictly positive amount. The only way
//! to build one is through a validating constructor, so every `Expense` in the
//! program satisfies the record invariants.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::money::Money;
use crate::error::{AmountIssue, ExpenseError, ExpenseResult};

/// The fixed date format used for input and for the expense file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount (one billion). Keeps any realistic collection's
/// total well inside `i64` cents.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Timestamp form written by spreadsheet tools; the time part is ignored
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    date: NaiveDate,
    amount: Money,
    category: String,
    description: String,
}

impl Expense {
    /// Validate raw text fields and build an expense
    ///
    /// Checks run in order: date, amount, category. The category is trimmed;
    /// the description is kept as given.
    pub fn new(
        date_text: &str,
        amount_text: &str,
        category: &str,
        description: &str,
    ) -> ExpenseResult<Self> {
        let date = parse_date(date_text)?;
        let amount = parse_amount(amount_text)?;
        Self::from_parts(date, amount, category, description)
    }

    /// Build an expense from already-parsed values
    pub fn from_parts(
        date: NaiveDate,
        amount: Money,
        category: &str,
        description: &str,
    ) -> ExpenseResult<Self> {
        check_amount(amount)
            .map_err(|issue| ExpenseError::InvalidAmount(amount.to_string(), issue))?;

        let category = category.trim();
        if category.is_empty() {
            return Err(ExpenseError::EmptyCategory);
        }

        Ok(Self {
            date,
            amount,
            category: category.to_string(),
            description: description.to_string(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Category as stored (trimmed, original casing)
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Key used for case-insensitive category comparison
    pub fn category_key(&self) -> String {
        category_key(&self.category)
    }
}

/// Normalize a category name for comparison: trimmed and lower-cased
pub fn category_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Parse a date in exactly the `YYYY-MM-DD` format, surrounding whitespace
/// included
pub fn parse_date(text: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ExpenseError::InvalidDateFormat(text.to_string()))
}

/// Parse a date as found in a stored file
///
/// Accepts `YYYY-MM-DD` as well as `YYYY-MM-DD HH:MM:SS`.
pub fn parse_stored_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

/// Parse a strictly positive amount of at most [`MAX_AMOUNT`], exact in cents
pub fn parse_amount(text: &str) -> ExpenseResult<Money> {
    let invalid = |issue| ExpenseError::InvalidAmount(text.to_string(), issue);

    let amount = Money::parse(text).map_err(|e| invalid(e.amount_issue()))?;
    check_amount(amount).map_err(invalid)?;
    Ok(amount)
}

fn check_amount(amount: Money) -> Result<(), AmountIssue> {
    if !amount.is_positive() {
        Err(AmountIssue::NotPositive)
    } else if amount > MAX_AMOUNT {
        Err(AmountIssue::TooLarge)
    } else {
        Ok(())
    }
}
