//! Query engine over a read-only view of the expense collection
//!
//! Filtering produces a new ordered subset; summarizing computes totals,
//! the average, and per-category sums. Neither mutates its input.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::models::expense::{category_key, parse_stored_date};
use crate::models::{Expense, Money};

/// Constraints for [`filter`]; every `None` field imposes no restriction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Inclusive lower bound on the expense date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the expense date
    pub end_date: Option<NaiveDate>,
    /// Category names, matched trimmed and case-insensitively
    pub categories: Option<Vec<String>>,
    /// Inclusive lower bound on the amount; zero means unset
    pub min_amount: Option<Money>,
    /// Inclusive upper bound on the amount; zero means unset
    pub max_amount: Option<Money>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set date bounds from text
    ///
    /// A bound that does not parse as a date leaves that side unbounded.
    pub fn with_date_text(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.start_date = start.and_then(parse_stored_date);
        self.end_date = end.and_then(parse_stored_date);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = Some(
            categories
                .into_iter()
                .map(|c| c.as_ref().to_string())
                .collect(),
        );
        self
    }

    pub fn with_min_amount(mut self, amount: Money) -> Self {
        self.min_amount = Some(amount);
        self
    }

    pub fn with_max_amount(mut self, amount: Money) -> Self {
        self.max_amount = Some(amount);
        self
    }

    /// Check whether no constraint is in effect
    pub fn is_unrestricted(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.categories.is_none()
            && effective(self.min_amount).is_none()
            && effective(self.max_amount).is_none()
    }
}

/// Amount bounds of exactly zero count as unset
fn effective(bound: Option<Money>) -> Option<Money> {
    bound.filter(|amount| !amount.is_zero())
}

/// Return the expenses matching every constraint, in their original order
pub fn filter(expenses: &[Expense], criteria: &ExpenseFilter) -> Vec<Expense> {
    let categories: Option<HashSet<String>> = criteria
        .categories
        .as_ref()
        .map(|names| names.iter().map(|name| category_key(name)).collect());
    let min_amount = effective(criteria.min_amount);
    let max_amount = effective(criteria.max_amount);

    expenses
        .iter()
        .filter(|e| criteria.start_date.map_or(true, |start| e.date() >= start))
        .filter(|e| criteria.end_date.map_or(true, |end| e.date() <= end))
        .filter(|e| {
            categories
                .as_ref()
                .map_or(true, |keys| keys.contains(&e.category_key()))
        })
        .filter(|e| min_amount.map_or(true, |min| e.amount() >= min))
        .filter(|e| max_amount.map_or(true, |max| e.amount() <= max))
        .cloned()
        .collect()
}

/// Aggregate figures over a non-empty collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all amounts
    pub total: Money,
    /// `total / count`, rounded to the nearest cent
    pub average: Money,
    /// Number of expenses
    pub count: usize,
    /// Sum per stored category name, in lexical order
    pub by_category: BTreeMap<String, Money>,
}

/// Result of [`summarize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// The collection was empty
    NoData,
    Totals(Totals),
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn totals(&self) -> Option<&Totals> {
        match self {
            Self::NoData => None,
            Self::Totals(totals) => Some(totals),
        }
    }
}

/// Compute total, average, and per-category sums
pub fn summarize(expenses: &[Expense]) -> Summary {
    let total: Money = expenses.iter().map(Expense::amount).sum();
    let Some(average) = total.div_round(expenses.len()) else {
        return Summary::NoData;
    };

    Summary::Totals(Totals {
        total,
        average,
        count: expenses.len(),
        by_category: category_totals(expenses),
    })
}

/// Sum of amounts per stored category name, in lexical order
///
/// Names differing only in case are separate entries.
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category().to_string()).or_default() += expense.amount();
    }
    totals
}
