//! Expense Tracker - a personal expense log with summaries, reports, and charts
//!
//! Expenses live in a CSV file. Every accepted expense is written through to
//! disk immediately, and every query works on the in-memory collection.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Diagnostic logging setup
//! - `models`: Core data models (expenses and money)
//! - `storage`: CSV file storage layer
//! - `services`: Adding, filtering, and summarizing expenses
//! - `reports`: Text report and chart data
//! - `display`: Terminal tables and charts
//! - `audit`: Audit log of add attempts
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::summarize;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let mut store = ExpenseStore::open("expenses.csv")?;
//! store.add("2024-01-05", "100", "Food", "lunch")?;
//! let summary = summarize(store.expenses());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{AmountIssue, ExpenseError, ExpenseResult};
