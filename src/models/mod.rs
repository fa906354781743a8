//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! monetary amounts and expense records.

pub mod expense;
pub mod money;

pub use expense::{category_key, parse_amount, parse_date, Expense, DATE_FORMAT, MAX_AMOUNT};
pub use money::{Money, MoneyParseError};
