//! Chart data
//!
//! Aggregates consumed by the chart renderers: category totals (bar),
//! daily totals (line), category shares (pie), and an amount histogram.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Expense, Money};

pub use crate::services::category_totals;

/// Default number of histogram buckets
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Upper limit on histogram buckets; larger requests are clamped
pub const MAX_HISTOGRAM_BINS: usize = 100;

/// Sum of amounts per day, ascending by date
pub fn daily_totals(expenses: &[Expense]) -> BTreeMap<NaiveDate, Money> {
    let mut totals: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.date()).or_default() += expense.amount();
    }
    totals
}

/// One slice of the category pie
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: Money,
    /// Percentage of the grand total (0-100)
    pub percentage: f64,
}

/// Category totals with their share of the grand total, in lexical order
pub fn category_shares(expenses: &[Expense]) -> Vec<CategoryShare> {
    let totals = category_totals(expenses);
    let grand_total: i64 = totals.values().map(Money::cents).sum();

    totals
        .into_iter()
        .map(|(category, total)| {
            let percentage = if grand_total == 0 {
                0.0
            } else {
                (total.cents() as f64 / grand_total as f64) * 100.0
            };
            CategoryShare {
                category,
                total,
                percentage,
            }
        })
        .collect()
}

/// One histogram bucket
///
/// Covers `lower..upper`, except the last bucket which also includes `upper`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Count amounts in `bins` equal-width buckets spanning the smallest to the
/// largest amount
///
/// `bins` is clamped to `1..=MAX_HISTOGRAM_BINS`. When every amount is equal
/// a single bucket holds them all.
pub fn amount_histogram(expenses: &[Expense], bins: usize) -> Vec<HistogramBin> {
    let cents: Vec<i64> = expenses.iter().map(|e| e.amount().cents()).collect();
    let (Some(&min), Some(&max)) = (cents.iter().min(), cents.iter().max()) else {
        return Vec::new();
    };

    if min == max {
        let edge = Money::from_cents(min).as_f64();
        return vec![HistogramBin {
            lower: edge,
            upper: edge,
            count: cents.len(),
        }];
    }

    let bins = bins.clamp(1, MAX_HISTOGRAM_BINS);
    let width = (max - min) as f64 / bins as f64;

    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: (min as f64 + width * i as f64) / 100.0,
            upper: (min as f64 + width * (i + 1) as f64) / 100.0,
            count: 0,
        })
        .collect();

    for value in cents {
        let index = (((value - min) as f64 / width) as usize).min(bins - 1);
        histogram[index].count += 1;
    }

    histogram
}
